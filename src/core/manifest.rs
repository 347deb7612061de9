//! core::manifest
//!
//! Module name extraction from `go.mod` manifests.
//!
//! Only the `module` directive is read. Everything else in the manifest
//! (requirements, replacements, toolchain lines) is ignored.

use thiserror::Error;

/// Manifest file name, relative to the repository root.
pub const MANIFEST_PATH: &str = "go.mod";

const MODULE_DIRECTIVE: &str = "module ";

/// Errors from decoding a fetched manifest.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("manifest is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Decode raw manifest bytes into text.
///
/// # Errors
///
/// Returns `ManifestError::InvalidEncoding` if the bytes are not UTF-8.
pub fn decode_manifest(bytes: Vec<u8>) -> Result<String, ManifestError> {
    String::from_utf8(bytes).map_err(|e| ManifestError::InvalidEncoding(e.to_string()))
}

/// Extract the module identifier from manifest text.
///
/// Returns the trimmed remainder of the first line whose trimmed form starts
/// with `module `. Returns an empty string when no such line exists.
///
/// # Example
///
/// ```
/// use govanity::core::manifest::parse_module_name;
///
/// assert_eq!(
///     parse_module_name("module pkg.blksails.net/foo\n\ngo 1.21\n"),
///     "pkg.blksails.net/foo"
/// );
/// assert_eq!(parse_module_name("go 1.21\n"), "");
/// ```
pub fn parse_module_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(MODULE_DIRECTIVE))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}
