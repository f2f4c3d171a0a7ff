// Rust guideline compliant 2026-10-14

//! Output formatting module for the linemerge CLI.
//!
//! This module formats merge results and errors as JSON or plain text.

use crate::response::{ErrorEnvelope, SuccessEnvelope};
use linemerge_core::MergeReport;
use serde_json::json;

/// Output formatter trait.
///
/// Defines the interface for formatting merge outcomes in different output formats.
pub trait OutputFormatter {
    /// Formats the report of a successful merge.
    fn format_report(&self, report: &MergeReport) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps results in the standard envelopes for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MergeReport) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(report))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize merge report" }).to_string())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "error": error.to_string() }).to_string())
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &MergeReport) -> String {
        format!(
            "Merged {} lines from {} sources into {} ({} bytes, {} order)",
            report.lines,
            report.sources,
            report.destination.display(),
            report.bytes,
            report.order
        )
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        // Core errors already render their cause.
        match error.downcast_ref::<linemerge_core::Error>() {
            Some(core) => core.to_string(),
            None => format!("{:#}", error),
        }
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON output was requested
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
