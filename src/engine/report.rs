//! engine::report
//!
//! Per-repository outcomes of a generation run.
//!
//! The report is kept apart from the registry: the registry holds what gets
//! published, the report holds what happened and why. Partial failures are
//! only visible here and in the logs.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::manifest::ManifestError;
use crate::core::types::PackageRecord;
use crate::forge::ForgeError;

/// Why a repository produced no records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("primary language is {}", .0.as_deref().unwrap_or("unknown"))]
    NotGo(Option<String>),

    #[error("no go.mod at repository root")]
    ManifestMissing,

    #[error("failed to fetch go.mod: {0}")]
    ManifestFetch(ForgeError),

    #[error("failed to decode go.mod: {0}")]
    ManifestDecode(ManifestError),

    #[error("go.mod has no module directive")]
    NoModuleDirective,

    #[error("module '{0}' is outside the base package")]
    PrefixMismatch(String),

    #[error("failed to list files: {0}")]
    ListingFailed(ForgeError),
}

impl SkipReason {
    /// Whether this skip is routine (not worth a warning).
    pub fn is_expected(&self) -> bool {
        matches!(self, SkipReason::NotGo(_) | SkipReason::PrefixMismatch(_))
    }
}

/// Result of processing one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The repository passed both gates.
    Included {
        /// Module identifier from go.mod
        module: String,
        /// Records produced by expansion, duplicates included
        records: Vec<PackageRecord>,
    },
    /// The repository was skipped.
    Skipped(SkipReason),
}

/// Outcome for a named repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOutcome {
    pub repo: String,
    pub outcome: Outcome,
}

/// A page that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    /// Import path, or `None` for the index page
    pub import_path: Option<String>,
    pub message: String,
}

/// Everything that happened during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per listed repository, in listing order
    pub repos: Vec<RepoOutcome>,
    /// Pages that failed to write
    pub write_failures: Vec<WriteFailure>,
    /// Number of page writes that succeeded
    pub pages_written: usize,
    /// Where the index landed, if it was written
    pub index_path: Option<PathBuf>,
}

impl RunReport {
    /// Repositories that passed both gates.
    pub fn included(&self) -> impl Iterator<Item = &RepoOutcome> {
        self.repos
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Included { .. }))
    }

    /// Skipped repositories with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.repos.iter().filter_map(|r| match &r.outcome {
            Outcome::Skipped(reason) => Some((r.repo.as_str(), reason)),
            Outcome::Included { .. } => None,
        })
    }

    /// Outcome for a repository by name.
    pub fn outcome(&self, repo: &str) -> Option<&Outcome> {
        self.repos
            .iter()
            .find(|r| r.repo == repo)
            .map(|r| &r.outcome)
    }

    /// Whether anything beyond routine skips went wrong.
    pub fn has_problems(&self) -> bool {
        !self.write_failures.is_empty() || self.skipped().any(|(_, r)| !r.is_expected())
    }
}
