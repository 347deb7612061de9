//! ui
//!
//! User-facing output and diagnostic logging.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Design
//!
//! Two channels, kept apart: the run summary goes to stdout through
//! [`output`], diagnostics go to stderr through `tracing`. Both honor the
//! same [`output::Verbosity`].

pub mod logging;
pub mod output;
