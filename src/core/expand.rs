//! core::expand
//!
//! Derive every import path a repository provides.
//!
//! # Rules
//!
//! - The module identifier itself is always the first record.
//! - Every directory (other than the root) holding at least one `.go` file
//!   yields one more record, `join_import_path(module, dir)`.
//! - One record is emitted per matching file, so a directory with several
//!   source files appears several times. The registry collapses these.
//!
//! Detection is purely structural. Directories whose files are all tests or
//! excluded by build constraints still produce a record.

use super::types::{EntryKind, PackageRecord, Repository};

/// Suffix identifying Go source files.
pub const SOURCE_SUFFIX: &str = ".go";

/// Expand a qualifying repository into package records.
///
/// # Example
///
/// ```
/// use govanity::core::expand::expand;
/// use govanity::core::types::{FileEntry, Repository};
///
/// let repo = Repository::new("foo", "https://github.com/o/foo")
///     .with_files(vec![FileEntry::file("main.go"), FileEntry::file("sub/util.go")]);
///
/// let paths: Vec<_> = expand("pkg.blksails.net/foo", &repo)
///     .into_iter()
///     .map(|r| r.import_path)
///     .collect();
/// assert_eq!(paths, vec!["pkg.blksails.net/foo", "pkg.blksails.net/foo/sub"]);
/// ```
pub fn expand(module: &str, repo: &Repository) -> Vec<PackageRecord> {
    let mut records = vec![PackageRecord::for_repo(module, repo)];

    for entry in &repo.file_entries {
        if entry.kind != EntryKind::File || !entry.name().ends_with(SOURCE_SUFFIX) {
            continue;
        }
        let dir = parent_dir(&entry.path);
        if dir == "." {
            continue;
        }
        records.push(PackageRecord::for_repo(
            join_import_path(module, dir),
            repo,
        ));
    }

    records
}

/// Directory part of a slash-separated path, `.` when there is none.
pub fn parent_dir(path: &str) -> &str {
    match path.trim_end_matches('/').rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Join two slash-separated paths and resolve dot segments.
///
/// Empty and `.` segments are dropped and `..` removes the previous
/// segment. A leading `/` on `base` is preserved.
///
/// # Example
///
/// ```
/// use govanity::core::expand::join_import_path;
///
/// assert_eq!(join_import_path("a.net/m", "x/y"), "a.net/m/x/y");
/// assert_eq!(join_import_path("a.net/m", "./x//y/"), "a.net/m/x/y");
/// assert_eq!(join_import_path("a.net/m", "x/../y"), "a.net/m/y");
/// ```
pub fn join_import_path(base: &str, rel: &str) -> String {
    let rooted = base.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(rel.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            s => segments.push(s),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
