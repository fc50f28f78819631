//! Depth-bounded recursive size calculation
//!
//! Every failure below the scan root is contained here: it is reported to
//! the [`Diagnostics`] handle and the affected subtree counts as zero.

use std::fs;
use std::path::Path;

use super::diagnostics::Diagnostics;

/// Sums file lengths below a directory, down to a fixed depth budget
pub struct SizeCalculator<'a> {
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> SizeCalculator<'a> {
    pub fn new(diagnostics: &'a dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Size of `path` in bytes.
    ///
    /// Files (and other non-directories) return their length whatever the budget. A directory with a
    /// negative budget returns 0. Otherwise the directory's files are summed
    /// and each subdirectory is measured with `remaining_depth - 1`.
    /// Symlinks are followed; a cycle is cut off by the budget.
    pub fn compute_size(&self, path: &Path, remaining_depth: i64) -> u64 {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                self.diagnostics.warn(path, &e);
                return 0;
            }
        };

        // FIFOs, sockets and devices report their direct length like files
        if metadata.is_dir() {
            self.dir_size(path, remaining_depth)
        } else {
            metadata.len()
        }
    }

    fn dir_size(&self, path: &Path, remaining_depth: i64) -> u64 {
        let verbose = self.diagnostics.verbose();
        if remaining_depth < 0 {
            if verbose {
                self.diagnostics
                    .trace(format_args!("Depth limit reached at {}", path.display()));
            }
            return 0;
        }

        if verbose {
            self.diagnostics.trace(format_args!(
                "Calculating size of {} (remaining depth {})",
                path.display(),
                remaining_depth
            ));
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                self.diagnostics.warn(path, &e);
                return 0;
            }
        };

        let mut total = 0u64;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.diagnostics.warn(path, &e);
                    continue;
                }
            };
            let child = entry.path();

            // fs::metadata follows symlinks, DirEntry::metadata does not
            let size = match fs::metadata(&child) {
                Ok(m) if m.is_dir() => self.dir_size(&child, remaining_depth - 1),
                Ok(m) => m.len(),
                Err(e) => {
                    self.diagnostics.warn(&child, &e);
                    0
                }
            };
            total = total.saturating_add(size);
        }
        total
    }
}
