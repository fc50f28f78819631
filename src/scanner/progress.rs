//! Progress reporting for the top-level pass of a scan
//!
//! The scanner ticks once per immediate child of the root, passing the
//! child's name and the bytes it contributed. Rendering is up to the
//! reporter.

use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;

use crate::util::format_size;

/// Receives one call per top-level child while a scan runs
pub trait ProgressHandle {
    /// `name` has been measured (or skipped after an error, with 0 bytes)
    fn item_done(&self, name: &str, bytes: u64);
    fn finish(&self);
}

/// Creates a handle sized to the number of top-level children
pub trait ProgressReporter {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle>;
}

/// Bar on stderr showing children done, bytes so far and the last child
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle> {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} {prefix} {pos}/{len} [{bar:30.cyan/blue}] {wide_msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        bar.set_prefix(label.to_string());
        Box::new(ScanBar {
            bar,
            bytes: Cell::new(0),
        })
    }
}

struct ScanBar {
    bar: ProgressBar,
    bytes: Cell<u64>,
}

impl ProgressHandle for ScanBar {
    fn item_done(&self, name: &str, bytes: u64) {
        let so_far = self.bytes.get().saturating_add(bytes);
        self.bytes.set(so_far);
        self.bar
            .set_message(format!("{} so far, last: {}", format_size(so_far), name));
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Draws nothing
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(NoopProgress)
    }
}

impl ProgressHandle for NoopProgress {
    fn item_done(&self, _name: &str, _bytes: u64) {}
    fn finish(&self) {}
}

/// Pick the reporter for a run: a live bar when requested, otherwise nothing
pub fn reporter(enabled: bool) -> Box<dyn ProgressReporter> {
    if enabled {
        Box::new(IndicatifProgress)
    } else {
        Box::new(NoopProgress)
    }
}
