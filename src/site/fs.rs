//! site::fs
//!
//! Filesystem sink writing pages under an output directory.
//!
//! Files are written atomically (temp file + rename) so an interrupted run
//! never leaves a half-written page behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{page_segments, PageSink, SinkError, PAGE_FILE};

/// Writes pages to `<root>/<relative import path>/index.html`.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
    base_domain: String,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>, base_domain: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_domain: base_domain.into(),
        }
    }

    /// Output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the page for `import_path` would be written.
    pub fn page_path(&self, import_path: &str) -> Result<PathBuf, SinkError> {
        let mut path = self.root.clone();
        for segment in page_segments(import_path, &self.base_domain)? {
            path.push(segment);
        }
        path.push(PAGE_FILE);
        Ok(path)
    }

    /// Where the index page is written.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(PAGE_FILE)
    }

    fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SinkError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SinkError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension("html.tmp");
        let write_err = |e| SinkError::Write {
            path: temp_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(&temp_path).map_err(write_err)?;
        file.write_all(contents).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        fs::rename(&temp_path, path).map_err(|e| SinkError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl PageSink for FsSink {
    fn write_page(&mut self, import_path: &str, contents: &[u8]) -> Result<PathBuf, SinkError> {
        let path = self.page_path(import_path)?;
        Self::write_atomic(&path, contents)?;
        Ok(path)
    }

    fn write_index(&mut self, contents: &[u8]) -> Result<PathBuf, SinkError> {
        let path = self.index_path();
        Self::write_atomic(&path, contents)?;
        Ok(path)
    }
}
