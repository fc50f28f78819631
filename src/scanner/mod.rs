//! Directory scanner
//!
//! Measures every immediate child of a root directory.
//!
//! # Architecture
//!
//! - **size**: depth-bounded recursive size calculation with failure containment
//! - **diagnostics**: warning and trace reporting abstraction
//! - **progress**: progress reporting abstraction
//! - **scanner**: the per-root orchestrator ([`Scanner`])

mod diagnostics;
mod progress;
mod size;

pub use diagnostics::{
    Diagnostics, LogDiagnostics, NoopDiagnostics, RecordedWarning, RecordingDiagnostics,
};
pub use progress::{reporter, IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};
pub use size::SizeCalculator;

use anyhow::{anyhow, bail, Context, Result};
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{ScanEntry, ScanResult};

/// Default recursion depth below each top-level child
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Check that `path` exists and is a readable directory, and return its
/// absolute form.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    match fs::metadata(path) {
        Ok(m) if m.is_dir() => {}
        Ok(_) => bail!("'{}' is not a directory", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            bail!("Path '{}' does not exist", path.display())
        }
        Err(e) => return Err(root_access_error(path, e)),
    }

    fs::canonicalize(path)
        .with_context(|| format!("Could not resolve path: {}", path.display()))
}

fn root_access_error(root: &Path, err: io::Error) -> anyhow::Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        anyhow!(err).context(format!(
            "Permission denied accessing '{}'. Try running with elevated privileges (e.g. sudo)",
            root.display()
        ))
    } else {
        anyhow!(err).context(format!("Failed to read directory '{}'", root.display()))
    }
}

/// Scans one root directory and sizes each of its immediate children
pub struct Scanner<'a> {
    diagnostics: &'a dyn Diagnostics,
    progress: &'a dyn ProgressReporter,
}

impl<'a> Scanner<'a> {
    pub fn new(diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            diagnostics,
            progress: &NoopProgress,
        }
    }

    /// Create a quiet scanner (no warnings or progress, used by benchmarks)
    pub fn quiet() -> Scanner<'static> {
        Scanner {
            diagnostics: &NoopDiagnostics,
            progress: &NoopProgress,
        }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// List `root` and measure each child.
    ///
    /// Directories are measured with `max_depth` levels of recursion below
    /// them. Failing to list `root` itself is an error; a child that cannot
    /// be measured is reported and left out of the result. Entries come
    /// back in listing order.
    pub fn scan(&self, root: &Path, max_depth: u32) -> Result<ScanResult> {
        self.diagnostics.trace(format_args!(
            "Scanning {} with max depth {}",
            root.display(),
            max_depth
        ));

        // Fully consume the listing before measuring so the handle is released early
        let children: Vec<io::Result<DirEntry>> = fs::read_dir(root)
            .map_err(|e| root_access_error(root, e))?
            .collect();
        let items_found = children.len();
        self.diagnostics
            .trace(format_args!("Found {} items in {}", items_found, root.display()));

        let calculator = SizeCalculator::new(self.diagnostics);
        let pb = self.progress.start("Scanning", items_found as u64);
        let mut entries = Vec::with_capacity(items_found);

        for child in children {
            let child = match child {
                Ok(child) => child,
                Err(e) => {
                    self.diagnostics.warn(root, &e);
                    pb.item_done("<unreadable entry>", 0);
                    continue;
                }
            };
            let path = child.path();
            let name = child.file_name().to_string_lossy().into_owned();

            match self.measure_child(&calculator, &path, max_depth) {
                Ok(size) => {
                    if self.diagnostics.verbose() {
                        self.diagnostics
                            .trace(format_args!("Item {}: {} bytes", path.display(), size));
                    }
                    pb.item_done(&name, size);
                    entries.push(ScanEntry::new(path, size));
                }
                Err(e) => {
                    self.diagnostics.warn(&path, &e);
                    pb.item_done(&name, 0);
                }
            }
        }

        pb.finish();

        Ok(ScanResult::new(root.to_path_buf(), items_found, entries))
    }

    /// Size of one top-level child. Anything that is not a directory
    /// (regular file, FIFO, socket, device) reports its direct length.
    fn measure_child(
        &self,
        calculator: &SizeCalculator<'_>,
        path: &Path,
        max_depth: u32,
    ) -> io::Result<u64> {
        let metadata = fs::metadata(path)?;
        if metadata.is_dir() {
            Ok(calculator.compute_size(path, i64::from(max_depth)))
        } else {
            Ok(metadata.len())
        }
    }
}
