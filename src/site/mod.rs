//! site
//!
//! Output sinks for rendered pages.
//!
//! # Layout
//!
//! Each import path maps to a directory: the configured base domain (plus
//! the following `/`) is stripped and the remainder becomes a relative
//! directory holding a fixed [`PAGE_FILE`]. The index page is written once
//! at the top of the output tree.
//!
//! ```text
//! pkg.blksails.net/foo      -> <out>/foo/index.html
//! pkg.blksails.net/foo/sub  -> <out>/foo/sub/index.html
//! (index)                   -> <out>/index.html
//! ```
//!
//! Import paths that do not start with the base domain keep their full
//! path. Paths with empty, `.` or `..` segments are rejected so nothing is
//! written outside the output tree.
//!
//! # Modules
//!
//! - [`fs`]: Filesystem sink
//! - [`memory`]: In-memory sink for tests

pub mod fs;
pub mod memory;

pub use fs::FsSink;
pub use memory::MemorySink;

use std::path::PathBuf;

use thiserror::Error;

/// File name of every generated page, including the index.
pub const PAGE_FILE: &str = "index.html";

/// Errors from writing pages.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("import path '{0}' does not map to a safe output directory")]
    InvalidPath(String),

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for rendered pages.
///
/// Writes must be idempotent: writing the same bytes for the same import
/// path twice leaves the same result as writing once.
pub trait PageSink {
    /// Write the page for `import_path`, returning where it went.
    fn write_page(&mut self, import_path: &str, contents: &[u8]) -> Result<PathBuf, SinkError>;

    /// Write the top-level index page, returning where it went.
    fn write_index(&mut self, contents: &[u8]) -> Result<PathBuf, SinkError>;
}

/// Relative directory segments for an import path.
///
/// # Example
///
/// ```
/// use govanity::site::page_segments;
///
/// let segments = page_segments("pkg.blksails.net/foo/sub", "pkg.blksails.net").unwrap();
/// assert_eq!(segments, vec!["foo", "sub"]);
///
/// let segments = page_segments("other.org/foo", "pkg.blksails.net").unwrap();
/// assert_eq!(segments, vec!["other.org", "foo"]);
///
/// assert!(page_segments("pkg.blksails.net/../etc", "pkg.blksails.net").is_err());
/// ```
pub fn page_segments<'a>(
    import_path: &'a str,
    base_domain: &str,
) -> Result<Vec<&'a str>, SinkError> {
    let relative = import_path
        .strip_prefix(base_domain)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(import_path);

    let segments: Vec<&str> = relative.split('/').collect();
    let unsafe_segment = |s: &&str| s.is_empty() || *s == "." || *s == ".." || s.contains('\\');
    if segments.iter().any(unsafe_segment) {
        return Err(SinkError::InvalidPath(import_path.to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_base_domain() {
        assert_eq!(
            page_segments("pkg.example.net/a/b", "pkg.example.net").unwrap(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn domain_without_slash_is_not_stripped() {
        assert_eq!(
            page_segments("pkg.example.network/a", "pkg.example.net").unwrap(),
            vec!["pkg.example.network", "a"]
        );
    }

    #[test]
    fn bare_domain_keeps_full_path() {
        assert_eq!(
            page_segments("pkg.example.net", "pkg.example.net").unwrap(),
            vec!["pkg.example.net"]
        );
    }

    #[test]
    fn rejects_unsafe_segments() {
        for path in [
            "pkg.example.net/",
            "pkg.example.net/a//b",
            "pkg.example.net/./a",
            "pkg.example.net/a/..",
            "pkg.example.net/a\\b",
            "",
        ] {
            assert!(
                matches!(
                    page_segments(path, "pkg.example.net"),
                    Err(SinkError::InvalidPath(_))
                ),
                "expected rejection for {:?}",
                path
            );
        }
    }
}
