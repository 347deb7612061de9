//! core::registry
//!
//! Insertion-ordered, unique-by-import-path collection of package records.
//!
//! # Invariants
//!
//! - No two records share an import path.
//! - Re-inserting an import path replaces the record in place; the
//!   position of the first insertion is kept.
//!
//! Order is first-discovered-first within a run. Providers do not promise
//! a listing order, so order across runs is not stable.

use std::collections::HashMap;

use super::types::PackageRecord;

/// Records discovered during one generation run.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<PackageRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record with the same path.
    ///
    /// Returns `true` if the import path was new.
    ///
    /// # Example
    ///
    /// ```
    /// use govanity::core::registry::Registry;
    /// use govanity::core::types::{PackageRecord, Repository};
    ///
    /// let repo = Repository::new("foo", "https://github.com/o/foo");
    /// let mut registry = Registry::new();
    ///
    /// assert!(registry.insert(PackageRecord::for_repo("m/a", &repo)));
    /// assert!(!registry.insert(PackageRecord::for_repo("m/a", &repo)));
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn insert(&mut self, record: PackageRecord) -> bool {
        match self.index.get(&record.import_path) {
            Some(&pos) => {
                self.records[pos] = record;
                false
            }
            None => {
                self.index
                    .insert(record.import_path.clone(), self.records.len());
                self.records.push(record);
                true
            }
        }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[PackageRecord] {
        &self.records
    }

    /// Look up a record by import path.
    pub fn get(&self, import_path: &str) -> Option<&PackageRecord> {
        self.index.get(import_path).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.index.contains_key(import_path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the registry, yielding records in insertion order.
    pub fn into_records(self) -> Vec<PackageRecord> {
        self.records
    }
}
