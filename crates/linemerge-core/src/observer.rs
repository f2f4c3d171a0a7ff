// Rust guideline compliant 2026-10-14

//! Lifecycle notifications for merge calls.

use crate::merge::MergeReport;
use crate::{Error, SourceId};

/// Receives lifecycle events from a [`MergeCoordinator`](crate::MergeCoordinator).
///
/// `source_completed` is called from worker threads as reads finish, in no
/// particular order. `succeeded` or `failed` is called exactly once per merge.
pub trait MergeObserver: Send + Sync {
    /// The merge started with `sources` source identifiers.
    fn started(&self, _sources: usize) {}

    /// One source was read successfully.
    fn source_completed(&self, _source_id: &SourceId, _lines: usize) {}

    /// The destination now holds the complete merge.
    fn succeeded(&self, _report: &MergeReport) {}

    /// The merge failed.
    fn failed(&self, _error: &Error) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}
