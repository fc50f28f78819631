//! Diagnostics reporting abstraction
//!
//! The scanner never logs directly. Warnings about contained failures and
//! verbose tracing go through a [`Diagnostics`] handle injected at
//! construction, so library users and tests decide where they end up.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Sink for scan warnings and verbose trace lines
pub trait Diagnostics {
    /// Whether trace lines and extended warning detail are wanted
    fn verbose(&self) -> bool;

    /// Report a contained failure on `path`. The scan continues.
    fn warn(&self, path: &Path, err: &io::Error);

    /// Report a trace line. Only emitted in verbose mode.
    fn trace(&self, args: fmt::Arguments<'_>);
}

/// Forwards to the `log` facade
pub struct LogDiagnostics {
    verbose: bool,
}

impl LogDiagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Diagnostics for LogDiagnostics {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn warn(&self, path: &Path, err: &io::Error) {
        if self.verbose {
            log::warn!(
                "Cannot access {}: {} (kind: {:?}, detail: {:?})",
                path.display(),
                err,
                err.kind(),
                err
            );
        } else {
            log::warn!("Cannot access {}: {}", path.display(), err);
        }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            log::debug!("{}", args);
        }
    }
}

/// Discards everything (benchmarks and quiet library use)
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn verbose(&self) -> bool {
        false
    }

    fn warn(&self, _path: &Path, _err: &io::Error) {}

    fn trace(&self, _args: fmt::Arguments<'_>) {}
}

/// A warning captured by [`RecordingDiagnostics`]
#[derive(Debug, Clone)]
pub struct RecordedWarning {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

/// Keeps warnings and trace lines in memory for later inspection
#[derive(Default)]
pub struct RecordingDiagnostics {
    verbose: bool,
    warnings: RefCell<Vec<RecordedWarning>>,
    traces: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn warnings(&self) -> Vec<RecordedWarning> {
        self.warnings.borrow().clone()
    }

    pub fn traces(&self) -> Vec<String> {
        self.traces.borrow().clone()
    }

    /// Whether any warning was recorded for exactly `path`
    pub fn warned_about(&self, path: &Path) -> bool {
        self.warnings.borrow().iter().any(|w| w.path == path)
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn warn(&self, path: &Path, err: &io::Error) {
        self.warnings.borrow_mut().push(RecordedWarning {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            self.traces.borrow_mut().push(args.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_captures_warnings() {
        let diag = RecordingDiagnostics::new(false);
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        diag.warn(Path::new("/locked"), &err);

        let warnings = diag.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, io::ErrorKind::PermissionDenied);
        assert!(diag.warned_about(Path::new("/locked")));
        assert!(!diag.warned_about(Path::new("/other")));
    }

    #[test]
    fn test_traces_only_kept_when_verbose() {
        let quiet = RecordingDiagnostics::new(false);
        quiet.trace(format_args!("descending into {}", "/a"));
        assert!(quiet.traces().is_empty());

        let verbose = RecordingDiagnostics::new(true);
        verbose.trace(format_args!("descending into {}", "/a"));
        assert_eq!(verbose.traces(), vec!["descending into /a".to_string()]);
    }

    #[test]
    fn test_log_diagnostics_verbose_flag() {
        assert!(LogDiagnostics::new(true).verbose());
        assert!(!LogDiagnostics::new(false).verbose());
        assert!(!NoopDiagnostics.verbose());
    }
}
