//! site::memory
//!
//! In-memory sink for tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{page_segments, PageSink, SinkError, PAGE_FILE};

/// Collects pages keyed by their relative directory (`foo/sub`).
///
/// # Example
///
/// ```
/// use govanity::site::{MemorySink, PageSink};
///
/// let mut sink = MemorySink::new("pkg.example.net");
/// sink.write_page("pkg.example.net/foo", b"<html>").unwrap();
///
/// assert_eq!(sink.page("foo"), Some(&b"<html>"[..]));
/// assert_eq!(sink.page_dirs(), vec!["foo"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    base_domain: String,
    pages: BTreeMap<String, Vec<u8>>,
    index: Option<Vec<u8>>,
    writes: usize,
}

impl MemorySink {
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            ..Default::default()
        }
    }

    /// Page stored for a relative directory.
    pub fn page(&self, dir: &str) -> Option<&[u8]> {
        self.pages.get(dir).map(Vec::as_slice)
    }

    /// All relative directories holding a page, sorted.
    pub fn page_dirs(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    /// The index page, if written.
    pub fn index(&self) -> Option<&[u8]> {
        self.index.as_deref()
    }

    /// Total number of page writes, counting overwrites.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PageSink for MemorySink {
    fn write_page(&mut self, import_path: &str, contents: &[u8]) -> Result<PathBuf, SinkError> {
        let dir = page_segments(import_path, &self.base_domain)?.join("/");
        let path = PathBuf::from(&dir).join(PAGE_FILE);
        self.pages.insert(dir, contents.to_vec());
        self.writes += 1;
        Ok(path)
    }

    fn write_index(&mut self, contents: &[u8]) -> Result<PathBuf, SinkError> {
        self.index = Some(contents.to_vec());
        Ok(PathBuf::from(PAGE_FILE))
    }
}
