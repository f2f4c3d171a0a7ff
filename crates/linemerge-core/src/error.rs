// Rust guideline compliant 2026-10-14

//! Error types for the linemerge core library.

use crate::source::SourceId;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for linemerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A source could not be opened, read, or decoded.
    SourceUnavailable,
    /// The destination could not be written.
    DestinationWriteFailed,
    /// The merge as a whole did not complete.
    MergeFailed,
    /// Configuration could not be parsed or failed validation.
    InvalidConfig,
    /// A merge phase transition was rejected.
    InvalidTransition,
    /// The worker pool could not be created.
    WorkerPool,
}

/// Error types for linemerge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A named source could not be read.
    #[error("Source unavailable: {source_id}: {cause}")]
    SourceUnavailable {
        /// The source that failed.
        source_id: SourceId,
        /// Underlying IO or decode failure.
        #[source]
        cause: std::io::Error,
    },

    /// The destination could not be opened for writing or the write was interrupted.
    #[error("Destination write failed: {}: {cause}", .path.display())]
    DestinationWriteFailed {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        cause: std::io::Error,
    },

    /// The merge did not complete. Wraps the first failure in source order.
    #[error("Merge failed ({failed} failure(s)): {cause}")]
    MergeFailed {
        /// First underlying failure.
        #[source]
        cause: Box<Error>,
        /// Number of failures observed during the call.
        failed: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid merge phase transition.
    #[error("Invalid merge transition: {0}")]
    InvalidTransition(String),

    /// Worker pool construction failed.
    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Wraps a single failure as a failed merge.
    pub fn merge_failed(cause: Error, failed: usize) -> Self {
        Error::MergeFailed {
            cause: Box::new(cause),
            failed,
        }
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::SourceUnavailable { .. } => ErrorCode::SourceUnavailable,
            Error::DestinationWriteFailed { .. } => ErrorCode::DestinationWriteFailed,
            Error::MergeFailed { .. } => ErrorCode::MergeFailed,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Error::InvalidTransition(_) => ErrorCode::InvalidTransition,
            Error::WorkerPool(_) => ErrorCode::WorkerPool,
        }
    }

    /// Returns the innermost error, unwrapping `MergeFailed` layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::MergeFailed { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// Returns the failing source identifier, if the root cause is a source failure.
    #[must_use]
    pub fn source_id(&self) -> Option<&SourceId> {
        match self.root_cause() {
            Error::SourceUnavailable { source_id, .. } => Some(source_id),
            _ => None,
        }
    }

    /// Returns the IO error behind a source or destination failure.
    #[must_use]
    pub fn io_cause(&self) -> Option<&std::io::Error> {
        match self.root_cause() {
            Error::SourceUnavailable { cause, .. } => Some(cause),
            Error::DestinationWriteFailed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
