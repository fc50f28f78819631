use serde::Serialize;
use std::path::{Path, PathBuf};

/// One row of a scan: an immediate child of the scan root and its size in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    path: PathBuf,
    size: u64,
}

impl ScanEntry {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}
