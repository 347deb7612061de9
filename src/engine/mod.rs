//! engine
//!
//! Orchestrates a generation run over one organization.
//!
//! # Architecture
//!
//! The engine owns the [`Registry`](crate::core::registry::Registry) for the
//! duration of a run and talks to its collaborators only through traits:
//!
//! - [`RepoProvider`](crate::forge::RepoProvider) for repositories and files
//! - [`Renderer`](crate::render::Renderer) for documents
//! - [`PageSink`](crate::site::PageSink) for output
//!
//! # Invariants
//!
//! - Repositories are processed strictly one at a time
//! - Only a failed repository listing aborts a run
//! - The index page always reflects the final registry contents
//!
//! # Example
//!
//! ```ignore
//! use govanity::engine::{GenerateOptions, Generator};
//! use govanity::forge::GitHubProvider;
//! use govanity::render::HtmlRenderer;
//! use govanity::site::FsSink;
//!
//! let provider = GitHubProvider::new(token);
//! let mut sink = FsSink::new("public", "pkg.blksails.net");
//! let mut generator = Generator::new(&provider, &HtmlRenderer, &mut sink, options);
//! let output = generator.run().await?;
//! println!("{} packages", output.registry.len());
//! ```

pub mod generate;
pub mod report;

pub use generate::{GenerateError, GenerateOptions, Generator, RunOutput};
pub use report::{Outcome, RepoOutcome, RunReport, SkipReason, WriteFailure};
