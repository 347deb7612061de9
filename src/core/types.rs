//! core::types
//!
//! Domain types shared across the pipeline.
//!
//! # Types
//!
//! - [`Repository`] - A repository as reported by the provider
//! - [`FileEntry`] / [`EntryKind`] - One entry of a repository file listing
//! - [`PackageRecord`] - One import path eligible for page rendering
//!
//! # Examples
//!
//! ```
//! use govanity::core::types::{EntryKind, FileEntry, Repository};
//!
//! let repo = Repository::new("foo", "https://github.com/blksails/foo")
//!     .with_language("Go")
//!     .with_files(vec![FileEntry::file("sub/util.go")]);
//!
//! assert_eq!(repo.language.as_deref(), Some("Go"));
//! assert_eq!(repo.file_entries[0].kind, EntryKind::File);
//! ```

/// Branch used in source links when the provider does not report one.
pub const FALLBACK_BRANCH: &str = "master";

/// Kind of a file listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file
    File,
    /// A directory
    Dir,
    /// Anything else (submodules, symlinks)
    Other,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Dir => write!(f, "dir"),
            EntryKind::Other => write!(f, "other"),
        }
    }
}

/// One entry of a repository file listing.
///
/// `path` is slash-separated and relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl FileEntry {
    /// Create a file entry.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Dir,
        }
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A repository as reported by the provider.
///
/// Immutable once fetched, except that the generator fills
/// `file_entries` from a separate listing call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Repository {
    /// Repository name (without owner)
    pub name: String,
    /// Primary language tag, if the provider detected one
    pub language: Option<String>,
    /// Web URL of the repository
    pub html_url: String,
    /// Free-form description
    pub description: Option<String>,
    /// Default branch name
    pub default_branch: Option<String>,
    /// Recursive file listing, relative to the repository root
    pub file_entries: Vec<FileEntry>,
}

impl Repository {
    /// Create a repository with only a name and URL.
    pub fn new(name: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html_url: html_url.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = Some(branch.into());
        self
    }

    pub fn with_files(mut self, entries: Vec<FileEntry>) -> Self {
        self.file_entries = entries;
        self
    }

    /// Description, or empty string when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Default branch, falling back to [`FALLBACK_BRANCH`].
    pub fn branch(&self) -> &str {
        self.default_branch.as_deref().unwrap_or(FALLBACK_BRANCH)
    }
}

/// One (import path, repository URL, description) tuple.
///
/// Records live for one generation run; only their rendered pages persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Vanity import path, e.g. `pkg.blksails.net/foo/sub`
    pub import_path: String,
    /// Web URL of the backing repository
    pub repo_url: String,
    /// Repository description (may be empty)
    pub description: String,
    /// Branch used for `go-source` links
    pub branch: String,
}

impl PackageRecord {
    /// Build a record for `import_path` backed by `repo`.
    pub fn for_repo(import_path: impl Into<String>, repo: &Repository) -> Self {
        Self {
            import_path: import_path.into(),
            repo_url: repo.html_url.clone(),
            description: repo.description_or_empty().to_string(),
            branch: repo.branch().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_is_last_component() {
        assert_eq!(FileEntry::file("a/b/c.go").name(), "c.go");
        assert_eq!(FileEntry::file("main.go").name(), "main.go");
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Dir.to_string(), "dir");
        assert_eq!(EntryKind::Other.to_string(), "other");
    }

    #[test]
    fn branch_falls_back_to_master() {
        let repo = Repository::new("foo", "https://github.com/o/foo");
        assert_eq!(repo.branch(), "master");

        let repo = repo.with_default_branch("main");
        assert_eq!(repo.branch(), "main");
    }

    #[test]
    fn record_copies_repository_fields() {
        let repo = Repository::new("foo", "https://github.com/o/foo")
            .with_description("Foo things")
            .with_default_branch("main");
        let record = PackageRecord::for_repo("pkg.example.net/foo", &repo);

        assert_eq!(record.import_path, "pkg.example.net/foo");
        assert_eq!(record.repo_url, "https://github.com/o/foo");
        assert_eq!(record.description, "Foo things");
        assert_eq!(record.branch, "main");
    }

    #[test]
    fn missing_description_is_empty() {
        let repo = Repository::new("foo", "https://github.com/o/foo");
        let record = PackageRecord::for_repo("pkg.example.net/foo", &repo);
        assert_eq!(record.description, "");
    }
}
