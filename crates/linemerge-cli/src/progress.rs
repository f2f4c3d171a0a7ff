// Rust guideline compliant 2026-10-14

//! Progress reporting for merges run from the CLI.

use crate::terminal::print_progress;
use linemerge_core::{Error, MergeObserver, MergeReport, SourceId};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Observer that emits periodic progress lines on stderr.
pub struct ProgressReporter {
    label: String,
    total: AtomicUsize,
    completed: AtomicUsize,
    interval: usize,
    use_color: bool,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `label` - Label to include in progress messages
    /// * `interval` - Report every N completed sources (minimum 1)
    /// * `use_color` - Whether to color the progress prefix
    ///
    /// # Returns
    ///
    /// A new ProgressReporter instance.
    pub fn new(label: &str, interval: usize, use_color: bool) -> Self {
        Self {
            label: label.to_string(),
            total: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            interval: interval.max(1),
            use_color,
        }
    }

    /// Returns the number of sources read so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Formats a progress line for `current` completed sources.
    pub fn message(&self, current: usize) -> String {
        format!(
            "{}: {} / {}",
            self.label,
            current,
            self.total.load(Ordering::SeqCst)
        )
    }

    fn emit(&self, message: &str) {
        print_progress(message, self.use_color);
    }
}

impl MergeObserver for ProgressReporter {
    fn started(&self, sources: usize) {
        self.total.store(sources, Ordering::SeqCst);
        self.completed.store(0, Ordering::SeqCst);
        self.emit(&format!("{}: {} sources", self.label, sources));
    }

    fn source_completed(&self, _source_id: &SourceId, _lines: usize) {
        let current = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        if current.is_multiple_of(self.interval) {
            self.emit(&self.message(current));
        }
    }

    fn succeeded(&self, report: &MergeReport) {
        self.emit(&format!(
            "{} complete, {} lines",
            self.message(self.completed()),
            report.lines
        ));
    }

    fn failed(&self, error: &Error) {
        self.emit(&format!("{}: failed: {}", self.label, error));
    }
}
