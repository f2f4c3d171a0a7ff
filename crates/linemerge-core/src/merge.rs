// Rust guideline compliant 2026-10-14

//! Concurrent multi-source merge.
//!
//! [`MergeCoordinator`] reads every source as its own task on a bounded worker
//! pool, joins all reads, and only then decides: any failure fails the whole call with nothing
//! written; otherwise the lines are concatenated, sorted, and written to the
//! destination in one replacement.

use crate::config::MergeConfig;
use crate::destination::Destination;
use crate::fsm::{MergePhase, PhaseTracker};
use crate::observer::MergeObserver;
use crate::order::LineOrder;
use crate::source::{FileSource, SourceId, SourceReader};
use crate::{Error, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Summary of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Number of source identifiers merged, duplicates included.
    pub sources: usize,
    /// Number of lines written.
    pub lines: usize,
    /// Number of bytes written, terminators included.
    pub bytes: u64,
    /// Destination path.
    pub destination: PathBuf,
    /// Order the lines were sorted by.
    pub order: LineOrder,
}

/// Fans out source reads, joins them, and writes the sorted union.
pub struct MergeCoordinator<R = FileSource> {
    reader: R,
    order: LineOrder,
    max_concurrency: Option<NonZeroUsize>,
    observer: Option<Arc<dyn MergeObserver>>,
}

impl MergeCoordinator<FileSource> {
    /// Creates a file-backed coordinator with lexical order and no concurrency cap.
    pub fn new() -> Self {
        Self::with_reader(FileSource::new())
    }

    /// Creates a file-backed coordinator from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &MergeConfig) -> Result<Self> {
        config.validate()?;
        let mut coordinator = Self::new().with_order(config.order);
        coordinator.max_concurrency = config.max_concurrency.and_then(NonZeroUsize::new);
        Ok(coordinator)
    }
}

impl Default for MergeCoordinator<FileSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SourceReader> MergeCoordinator<R> {
    /// Creates a coordinator that reads sources through `reader`.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            order: LineOrder::default(),
            max_concurrency: None,
            observer: None,
        }
    }

    /// Sets the order used to sort merged lines.
    #[must_use]
    pub fn with_order(mut self, order: LineOrder) -> Self {
        self.order = order;
        self
    }

    /// Caps the number of reads outstanding at once.
    ///
    /// Without a cap, [`default_max_concurrency`] applies.
    #[must_use]
    pub fn with_max_concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.max_concurrency = Some(limit);
        self
    }

    /// Attaches an observer for lifecycle events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MergeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the configured line order.
    pub fn order(&self) -> LineOrder {
        self.order
    }

    /// Returns the explicitly configured concurrency cap, if any.
    pub fn max_concurrency(&self) -> Option<NonZeroUsize> {
        self.max_concurrency
    }

    /// Reads every source concurrently and concatenates the lines in source order.
    ///
    /// Every read runs to completion before the result is decided.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeFailed`] wrapping the first failed source in list
    /// order, or wrapping [`Error::WorkerPool`] if the worker pool cannot be
    /// created.
    pub fn gather(&self, sources: &[SourceId]) -> Result<Vec<String>> {
        let workers = self.worker_count(sources.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("linemerge-read-{}", index))
            .build()
            .map_err(worker_pool_failed)?;

        tracing::debug!(sources = sources.len(), workers, "gathering sources");

        let results: Vec<Result<Vec<String>>> = pool.install(|| {
            sources
                .par_iter()
                .with_max_len(1)
                .map(|source_id| self.read_one(source_id))
                .collect()
        });

        let failed = results.iter().filter(|result| result.is_err()).count();
        let mut merged = Vec::with_capacity(
            results
                .iter()
                .map(|result| result.as_ref().map_or(0, Vec::len))
                .sum(),
        );

        for result in results {
            match result {
                Ok(lines) => merged.extend(lines),
                Err(error) => return Err(Error::merge_failed(error, failed)),
            }
        }

        Ok(merged)
    }

    /// Gathers all sources and sorts the lines without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails.
    pub fn merge_sorted(&self, sources: &[SourceId]) -> Result<Vec<String>> {
        let mut lines = self.gather(sources)?;
        self.order.sort(&mut lines);
        Ok(lines)
    }

    /// Merges `sources` into `destination`.
    ///
    /// # Returns
    ///
    /// A [`MergeReport`] describing the written output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeFailed`] if any source cannot be read or the
    /// destination cannot be written. The destination keeps its previous
    /// contents in both cases.
    pub fn merge(&self, sources: &[SourceId], destination: &Destination) -> Result<MergeReport> {
        let _span = tracing::info_span!(
            "merge",
            sources = sources.len(),
            destination = %destination.path().display()
        )
        .entered();

        tracing::info!(order = %self.order, "merge started");
        if let Some(observer) = &self.observer {
            observer.started(sources.len());
        }

        let mut tracker = PhaseTracker::new();
        match self.run(sources, destination, &mut tracker) {
            Ok(report) => {
                tracing::info!(lines = report.lines, bytes = report.bytes, "merge complete");
                if let Some(observer) = &self.observer {
                    observer.succeeded(&report);
                }
                Ok(report)
            }
            Err(error) => {
                if !tracker.phase().is_terminal() && tracker.phase() != MergePhase::Pending {
                    if let Err(transition) = tracker.advance(MergePhase::Failed) {
                        tracing::warn!(error = %transition, "could not record failed phase");
                    }
                }
                tracing::error!(error = %error, "merge failed");
                if let Some(observer) = &self.observer {
                    observer.failed(&error);
                }
                Err(error)
            }
        }
    }

    fn run(
        &self,
        sources: &[SourceId],
        destination: &Destination,
        tracker: &mut PhaseTracker,
    ) -> Result<MergeReport> {
        tracker.advance(MergePhase::Gathering)?;
        let mut lines = self.gather(sources)?;

        tracker.advance(MergePhase::Sorting)?;
        self.order.sort(&mut lines);

        tracker.advance(MergePhase::Writing)?;
        let bytes = destination
            .replace_lines(&lines)
            .map_err(|error| Error::merge_failed(error, 1))?;

        tracker.advance(MergePhase::Done)?;
        Ok(MergeReport {
            sources: sources.len(),
            lines: lines.len(),
            bytes,
            destination: destination.path().to_path_buf(),
            order: self.order,
        })
    }

    fn read_one(&self, source_id: &SourceId) -> Result<Vec<String>> {
        match self.reader.read(source_id) {
            Ok(lines) => {
                tracing::debug!(source = %source_id, lines = lines.len(), "source read");
                if let Some(observer) = &self.observer {
                    observer.source_completed(source_id, lines.len());
                }
                Ok(lines)
            }
            Err(error) => {
                tracing::warn!(source = %source_id, error = %error, "source read failed");
                Err(error)
            }
        }
    }

    /// One worker per source, at least one, never more than the cap.
    fn worker_count(&self, sources: usize) -> usize {
        let limit = self.max_concurrency.unwrap_or_else(default_max_concurrency);
        sources.max(1).min(limit.get())
    }
}

/// Reads allowed in flight per available CPU when no cap is configured.
///
/// Reads mostly wait on IO, so the pool is allowed to exceed the CPU count.
pub const READS_PER_CPU: usize = 4;

/// Concurrency cap used when none is configured.
///
/// [`READS_PER_CPU`] times the available parallelism, or [`READS_PER_CPU`]
/// when the parallelism cannot be queried.
pub fn default_max_concurrency() -> NonZeroUsize {
    let cpus = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    NonZeroUsize::new(cpus.saturating_mul(READS_PER_CPU)).unwrap_or(NonZeroUsize::MIN)
}

fn worker_pool_failed(error: rayon::ThreadPoolBuildError) -> Error {
    Error::merge_failed(Error::WorkerPool(error), 1)
}

/// Merges files into `destination` with the default coordinator.
///
/// # Arguments
///
/// * `sources` - Paths of the source files
/// * `destination` - Path of the output file
///
/// # Errors
///
/// Returns an error if:
/// - Any source path is not valid UTF-8
/// - Any source cannot be read
/// - The destination cannot be written
pub fn merge_files<P: AsRef<Path>>(sources: &[P], destination: impl AsRef<Path>) -> Result<MergeReport> {
    let sources = sources
        .iter()
        .map(|path| SourceId::try_from(path.as_ref()))
        .collect::<Result<Vec<_>>>()
        .map_err(|error| Error::merge_failed(error, 1))?;
    MergeCoordinator::new().merge(&sources, &Destination::new(destination.as_ref()))
}
