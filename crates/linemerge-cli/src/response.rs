// Rust guideline compliant 2026-10-14

//! Response envelopes for JSON output.

use linemerge_core::{Error, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Status indicator.
    pub status: &'static str,
    /// Stable error code, absent for errors raised outside the merge core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from any CLI error.
    #[must_use]
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<Error>() {
            Some(core) => Self {
                status: "error",
                code: Some(core.code()),
                message: core.to_string(),
                details: details(core),
            },
            None => Self {
                status: "error",
                code: None,
                message: format!("{:#}", error),
                details: None,
            },
        }
    }
}

/// Returns structured details for errors that benefit from extra context.
fn details(error: &Error) -> Option<serde_json::Value> {
    let failed = match error {
        Error::MergeFailed { failed, .. } => Some(*failed),
        _ => None,
    };

    match error.root_cause() {
        Error::SourceUnavailable { source_id, cause } => Some(serde_json::json!({
            "cause": error.root_cause().code(),
            "source": source_id,
            "io_kind": format!("{:?}", cause.kind()),
            "failed": failed,
        })),
        Error::DestinationWriteFailed { path, cause } => Some(serde_json::json!({
            "cause": error.root_cause().code(),
            "path": path,
            "io_kind": format!("{:?}", cause.kind()),
        })),
        _ => None,
    }
}
