//! render
//!
//! Page rendering for import paths and the package index.
//!
//! # Design
//!
//! Rendering is pure: a record (or the full record list) goes in, bytes come
//! out. No timestamps, no I/O. Identical input yields byte-identical output,
//! which is what makes re-running the generator idempotent on disk.
//!
//! The generator depends on the [`Renderer`] trait; [`HtmlRenderer`] is the
//! implementation producing `go-import` pages.

mod html;

pub use html::{escape_html, render_import_page, render_index_page, HtmlRenderer};

use crate::core::types::PackageRecord;

/// Site-wide values shown on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexContext {
    /// Domain serving the pages, used as title
    pub base_domain: String,
    /// Organization the packages belong to
    pub org: String,
}

impl IndexContext {
    pub fn new(base_domain: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            org: org.into(),
        }
    }
}

/// Turns package records into documents.
///
/// Implementations must be deterministic.
pub trait Renderer: Send + Sync {
    /// Render the redirect/metadata page for one import path.
    fn render_import_page(&self, record: &PackageRecord) -> Vec<u8>;

    /// Render the aggregate index page.
    fn render_index_page(&self, ctx: &IndexContext, records: &[PackageRecord]) -> Vec<u8>;
}
