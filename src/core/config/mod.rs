//! core::config
//!
//! Configuration schema, loading and resolution.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags ([`Overrides`])
//!
//! The credential token is never read from a file. It comes from
//! `$GITHUB_TOKEN` only, and its absence is fatal.
//!
//! # Config File Locations
//!
//! Searched in order, first hit wins:
//! 1. `--config <path>` (must exist)
//! 2. `$GOVANITY_CONFIG` if set
//! 3. `./govanity.toml`
//! 4. `$XDG_CONFIG_HOME/govanity/config.toml`
//! 5. `<platform config dir>/govanity/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use govanity::core::config::{Config, Overrides};
//!
//! let loaded = Config::load(None).unwrap();
//! let settings = loaded
//!     .config
//!     .resolve(Overrides::default(), std::env::var("GITHUB_TOKEN").ok())
//!     .unwrap();
//! println!("Scanning {}", settings.org);
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "GOVANITY_CONFIG";

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "govanity.toml";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("missing required setting '{0}' (set it in the config file or pass --{1})")]
    Missing(&'static str, &'static str),

    #[error("GITHUB_TOKEN environment variable is required")]
    MissingToken,
}

/// Settings supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub org: Option<String>,
    pub base_domain: Option<String>,
    pub base_package: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub api_base: Option<String>,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
}

/// Configuration as loaded from disk, before CLI overrides.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults if no file was found)
    pub file: FileConfig,
    /// Path the file was loaded from
    path: Option<PathBuf>,
}

/// Fully resolved settings for one generation run.
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub org: String,
    pub base_domain: String,
    pub base_package: String,
    pub output_dir: PathBuf,
    pub api_base: String,
    pub log_filter: Option<String>,
    token: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("org", &self.org)
            .field("base_domain", &self.base_domain)
            .field("base_package", &self.base_package)
            .field("output_dir", &self.output_dir)
            .field("api_base", &self.api_base)
            .field("log_filter", &self.log_filter)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// The API token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Config {
    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if a config file
    /// exists but cannot be parsed or validated. A missing default file is
    /// not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().find(|p| p.exists()),
        };

        let config = match path {
            Some(path) => Config {
                file: Self::read_config(&path)?,
                path: Some(path),
            },
            None => Config::default(),
        };

        config.file.validate()?;
        Ok(ConfigLoadResult { config })
    }

    /// Candidate config locations in search order.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }

        paths.push(PathBuf::from(LOCAL_CONFIG_FILE));

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("govanity/config.toml"));
        }

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("govanity/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Apply CLI overrides and the token, producing final settings.
    ///
    /// # Errors
    ///
    /// - `MissingToken` if `token` is absent or blank
    /// - `Missing` if `org` or `base_domain` is unset after merging
    /// - `InvalidValue` if an override is empty or malformed
    pub fn resolve(
        self,
        overrides: Overrides,
        token: Option<String>,
    ) -> Result<Settings, ConfigError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let file = self.file;
        let org = overrides
            .org
            .or(file.org)
            .ok_or(ConfigError::Missing("org", "org"))?;
        let base_domain = overrides
            .base_domain
            .or(file.base_domain)
            .map(|d| d.trim_end_matches('/').to_string())
            .ok_or(ConfigError::Missing("base_domain", "base-domain"))?;
        let base_package = overrides
            .base_package
            .or(file.base_package)
            .map(|p| p.trim_end_matches('/').to_string())
            .unwrap_or_else(|| base_domain.clone());
        let api_base = overrides
            .api_base
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let output_dir = overrides
            .output_dir
            .or(file.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        schema::validate_non_empty("org", &org)?;
        schema::validate_non_empty("base_domain", &base_domain)?;
        schema::validate_non_empty("base_package", &base_package)?;
        schema::validate_api_base(&api_base)?;

        Ok(Settings {
            org,
            base_domain,
            base_package,
            output_dir,
            api_base: api_base.trim_end_matches('/').to_string(),
            log_filter: file.log_filter,
            token,
        })
    }
}
