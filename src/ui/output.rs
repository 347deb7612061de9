//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.

use std::fmt::Display;

use crate::core::registry::Registry;
use crate::engine::RunReport;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default log filter directive for this verbosity.
    pub fn log_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// One-line summary of a run.
///
/// # Example
///
/// ```
/// use govanity::core::registry::Registry;
/// use govanity::engine::RunReport;
/// use govanity::ui::output::format_summary;
///
/// let summary = format_summary(&Registry::new(), &RunReport::default());
/// assert_eq!(summary, "0 packages from 0 repositories (0 skipped)");
/// ```
pub fn format_summary(registry: &Registry, report: &RunReport) -> String {
    let mut summary = format!(
        "{} {} from {} {} ({} skipped)",
        registry.len(),
        plural(registry.len(), "package", "packages"),
        report.included().count(),
        plural(report.included().count(), "repository", "repositories"),
        report.skipped().count(),
    );
    if !report.write_failures.is_empty() {
        summary.push_str(&format!(
            ", {} {} failed to write",
            report.write_failures.len(),
            plural(report.write_failures.len(), "page", "pages")
        ));
    }
    summary
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
