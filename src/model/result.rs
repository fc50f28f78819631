use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use super::ScanEntry;

/// Outcome of scanning a single root directory
///
/// `total` is computed once from the final entry set, so it always equals
/// the sum of the entry sizes.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    root: PathBuf,
    items_found: usize,
    entries: Vec<ScanEntry>,
    total: u64,
}

impl ScanResult {
    /// Build a result from the entries the scan produced.
    ///
    /// `items_found` is the number of children the root listing yielded,
    /// including any that were later omitted because of an error.
    pub fn new(root: PathBuf, items_found: usize, entries: Vec<ScanEntry>) -> Self {
        let total = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.size()));
        Self {
            root,
            items_found,
            entries,
            total,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn items_found(&self) -> usize {
        self.items_found
    }

    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Order entries largest first. Equal sizes fall back to path order.
    pub fn sort_by_size(&mut self) {
        self.entries.sort_by(compare_entries);
    }

    /// Consume and return the result with entries sorted largest first
    pub fn sorted(mut self) -> Self {
        self.sort_by_size();
        self
    }
}

fn compare_entries(a: &ScanEntry, b: &ScanEntry) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.path().cmp(b.path()))
}
