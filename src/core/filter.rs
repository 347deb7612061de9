//! core::filter
//!
//! The two inclusion gates: language tag, then manifest-declared prefix.
//!
//! Both are pure predicates. A repository with no language tag simply does
//! not qualify; there is no error case.

use super::types::Repository;

/// Language tag a repository must carry to be considered.
pub const GO_LANGUAGE: &str = "Go";

/// Check whether a repository's primary language is exactly `Go`.
///
/// # Example
///
/// ```
/// use govanity::core::filter::qualifies;
/// use govanity::core::types::Repository;
///
/// let repo = Repository::new("foo", "https://github.com/o/foo");
/// assert!(!qualifies(&repo));
/// assert!(qualifies(&repo.with_language("Go")));
/// ```
pub fn qualifies(repo: &Repository) -> bool {
    repo.language.as_deref() == Some(GO_LANGUAGE)
}

/// Check whether a module identifier falls under the base package prefix.
///
/// An empty identifier never passes, even against an empty prefix.
pub fn has_base_prefix(identifier: &str, prefix: &str) -> bool {
    !identifier.is_empty() && identifier.starts_with(prefix)
}
