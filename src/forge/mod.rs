//! forge
//!
//! Abstraction for the remote service that hosts the repositories.
//!
//! # Architecture
//!
//! The `RepoProvider` trait defines the three calls the generator needs:
//! list an organization's repositories, read one file, and list a
//! repository's files. The generator only ever talks to the trait.
//!
//! Provider failures are classified by the caller:
//! - A failed initial listing aborts the run
//! - Any other failure skips the repository it concerns
//!
//! # Modules
//!
//! - `traits`: Core `RepoProvider` trait and `ForgeError`
//! - [`github`]: GitHub implementation using the REST API
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use github::GitHubProvider;
pub use traits::*;
