//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Example
//!
//! ```toml
//! org = "blksails"
//! base_domain = "pkg.blksails.net"
//! base_package = "pkg.blksails.net"
//! output_dir = "public"
//! api_base = "https://api.github.com"
//! log_filter = "govanity=debug"
//! ```
//!
//! The credential token is not part of the file: it is only read from the
//! environment.

use std::path::PathBuf;

use serde::Deserialize;

use super::ConfigError;

/// Contents of a `govanity.toml` file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Organization whose repositories are scanned
    pub org: Option<String>,

    /// Domain stripped from import paths to form output directories
    pub base_domain: Option<String>,

    /// Prefix a module identifier must carry to be included
    pub base_package: Option<String>,

    /// Output directory for generated pages
    pub output_dir: Option<PathBuf>,

    /// GitHub API base URL
    pub api_base: Option<String>,

    /// Log filter directive (overridden by `RUST_LOG`)
    pub log_filter: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("org", &self.org),
            ("base_domain", &self.base_domain),
            ("base_package", &self.base_package),
        ] {
            if let Some(v) = value {
                validate_non_empty(key, v)?;
            }
        }

        if let Some(api_base) = &self.api_base {
            validate_api_base(api_base)?;
        }

        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "output_dir cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

pub(super) fn validate_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue(format!("{} cannot be empty", key)));
    }
    Ok(())
}

pub(super) fn validate_api_base(value: &str) -> Result<(), ConfigError> {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ConfigError::InvalidValue(format!(
            "api_base must be an http(s) URL, got '{}'",
            value
        )));
    }
    Ok(())
}
