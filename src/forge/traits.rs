//! forge::traits
//!
//! Provider trait for listing repositories and reading their files.
//!
//! # Design
//!
//! The `RepoProvider` trait is async because provider operations involve
//! network I/O. All methods return `Result` so callers decide whether a
//! failure is fatal (the initial listing) or skips one repository
//! (everything else).
//!
//! # Example
//!
//! ```ignore
//! use govanity::forge::{RepoProvider, ForgeError};
//!
//! async fn manifest(provider: &dyn RepoProvider) -> Result<Option<Vec<u8>>, ForgeError> {
//!     provider.get_file_content("blksails", "foo", "go.mod").await
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{FileEntry, Repository};

/// Errors from provider operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Source of repositories and their contents.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The generator only ever calls
/// one method at a time.
///
/// # Error Handling
///
/// A missing file is not an error: `get_file_content` returns `Ok(None)`.
/// Every other failure is a `ForgeError`. No method retries.
#[async_trait]
pub trait RepoProvider: Send + Sync {
    /// Get the provider name (e.g., "github").
    fn name(&self) -> &'static str;

    /// List every repository owned by `org`.
    ///
    /// The returned repositories have empty `file_entries`.
    ///
    /// # Errors
    ///
    /// - `AuthFailed` if the token is invalid or lacks permissions
    /// - `NotFound` if the organization doesn't exist
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, ForgeError>;

    /// Read one file from a repository's default branch.
    ///
    /// # Returns
    ///
    /// `Some(bytes)` with the raw file contents, `None` if the file does not
    /// exist.
    async fn get_file_content(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<Vec<u8>>, ForgeError>;

    /// List every entry under `path` (recursively) on the default branch.
    ///
    /// An empty `path` means the repository root. Entry paths are relative
    /// to the repository root, not to `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the repository is missing or empty
    async fn get_directory_listing(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<FileEntry>, ForgeError>;
}
