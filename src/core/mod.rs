//! core
//!
//! Domain types and the pure stages of the pipeline.
//!
//! # Modules
//!
//! - [`types`] - Repository, FileEntry, PackageRecord
//! - [`manifest`] - `go.mod` module name extraction
//! - [`filter`] - Language and prefix inclusion gates
//! - [`expand`] - Import path derivation from a file listing
//! - [`registry`] - Ordered, deduplicated record collection
//! - [`config`] - Configuration schema, loading and resolution
//!
//! # Design Principles
//!
//! - Nothing here performs network I/O
//! - Every stage is deterministic for identical input

pub mod config;
pub mod expand;
pub mod filter;
pub mod manifest;
pub mod registry;
pub mod types;
