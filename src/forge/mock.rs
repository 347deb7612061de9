//! forge::mock
//!
//! Mock provider implementation for deterministic testing.
//!
//! # Design
//!
//! The mock provider stores repositories, file contents and listings in
//! memory and allows configuring failure scenarios per repository. Every
//! call is recorded so tests can assert what the generator asked for.
//!
//! # Example
//!
//! ```
//! use govanity::forge::mock::MockProvider;
//! use govanity::forge::RepoProvider;
//! use govanity::core::types::{FileEntry, Repository};
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new()
//!     .with_repo(Repository::new("foo", "https://github.com/o/foo").with_language("Go"))
//!     .with_file("foo", "go.mod", "module pkg.example.net/foo\n")
//!     .with_listing("foo", vec![FileEntry::file("go.mod")]);
//!
//! let repos = provider.list_repositories("o").await.unwrap();
//! assert_eq!(repos.len(), 1);
//!
//! let manifest = provider.get_file_content("o", "foo", "go.mod").await.unwrap();
//! assert!(manifest.is_some());
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{ForgeError, RepoProvider};
use crate::core::types::{FileEntry, Repository};

/// Mock provider for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockProviderInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockProviderInner {
    /// Repositories in listing order.
    repos: Vec<Repository>,
    /// File contents keyed by (repo, path).
    files: HashMap<(String, String), Vec<u8>>,
    /// Recursive listings keyed by repo.
    listings: HashMap<String, Vec<FileEntry>>,
    /// Configured failures.
    fail_on: Vec<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_repositories with the given error.
    ListRepositories(ForgeError),
    /// Fail get_file_content for one repository.
    GetFileContent { repo: String, error: ForgeError },
    /// Fail get_directory_listing for one repository.
    GetDirectoryListing { repo: String, error: ForgeError },
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ListRepositories {
        org: String,
    },
    GetFileContent {
        org: String,
        repo: String,
        path: String,
    },
    GetDirectoryListing {
        org: String,
        repo: String,
        path: String,
    },
}

impl MockProvider {
    /// Create a new empty mock provider.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockProviderInner::default())),
        }
    }

    /// Add a repository to the listing.
    pub fn with_repo(self, repo: Repository) -> Self {
        self.inner.lock().unwrap().repos.push(repo);
        self
    }

    /// Store a file for a repository.
    pub fn with_file(self, repo: &str, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .files
            .insert((repo.to_string(), path.to_string()), contents.into());
        self
    }

    /// Set the recursive listing for a repository.
    pub fn with_listing(self, repo: &str, entries: Vec<FileEntry>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .listings
            .insert(repo.to_string(), entries);
        self
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use govanity::forge::mock::{MockProvider, FailOn};
    /// use govanity::forge::ForgeError;
    ///
    /// let provider = MockProvider::new()
    ///     .fail_on(FailOn::ListRepositories(ForgeError::RateLimited));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.inner.lock().unwrap().fail_on.push(fail_on);
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        self.inner.lock().unwrap().fail_on.clear();
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        self.inner.lock().unwrap().operations.push(op);
    }

    /// Find a configured failure matching `pred`.
    fn failure(&self, pred: impl Fn(&FailOn) -> Option<&ForgeError>) -> Option<ForgeError> {
        let inner = self.inner.lock().unwrap();
        inner.fail_on.iter().find_map(|f| pred(f).cloned())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, ForgeError> {
        self.record(MockOperation::ListRepositories {
            org: org.to_string(),
        });

        if let Some(err) = self.failure(|f| match f {
            FailOn::ListRepositories(e) => Some(e),
            _ => None,
        }) {
            return Err(err);
        }

        Ok(self.inner.lock().unwrap().repos.clone())
    }

    async fn get_file_content(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<Vec<u8>>, ForgeError> {
        self.record(MockOperation::GetFileContent {
            org: org.to_string(),
            repo: repo.to_string(),
            path: path.to_string(),
        });

        if let Some(err) = self.failure(|f| match f {
            FailOn::GetFileContent { repo: r, error } if r == repo => Some(error),
            _ => None,
        }) {
            return Err(err);
        }

        let inner = self.inner.lock().unwrap();
        Ok(inner
            .files
            .get(&(repo.to_string(), path.to_string()))
            .cloned())
    }

    async fn get_directory_listing(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<FileEntry>, ForgeError> {
        self.record(MockOperation::GetDirectoryListing {
            org: org.to_string(),
            repo: repo.to_string(),
            path: path.to_string(),
        });

        if let Some(err) = self.failure(|f| match f {
            FailOn::GetDirectoryListing { repo: r, error } if r == repo => Some(error),
            _ => None,
        }) {
            return Err(err);
        }

        let inner = self.inner.lock().unwrap();
        let entries = inner.listings.get(repo).cloned().unwrap_or_default();
        let prefix = path.trim_matches('/');
        if prefix.is_empty() {
            return Ok(entries);
        }
        Ok(entries
            .into_iter()
            .filter(|e| e.path == prefix || e.path.starts_with(&format!("{}/", prefix)))
            .collect())
    }
}
