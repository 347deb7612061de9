//! govanity - Static go-import vanity pages for a GitHub organization
//!
//! govanity lists an organization's repositories, keeps the Go ones whose
//! `go.mod` declares a module under a reserved prefix, and writes one
//! redirect page per importable path plus an index of every package.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! provider -> filter -> manifest -> expand -> registry -> render -> sink
//! ```
//!
//! - [`cli`] - Command-line interface layer (parses args, wires collaborators)
//! - [`engine`] - Orchestrates a run and reports per-repository outcomes
//! - [`core`] - Domain types, parsing, gating, expansion, registry, config
//! - [`forge`] - Abstraction for the repository host (GitHub)
//! - [`render`] - Pure page rendering
//! - [`site`] - Output sinks
//! - [`ui`] - Output and logging
//!
//! # Invariants
//!
//! 1. A single repository's failure never aborts a run
//! 2. Import paths are unique in the published set
//! 3. Identical input produces byte-identical output

pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod render;
pub mod site;
pub mod ui;
