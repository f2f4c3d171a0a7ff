// Rust guideline compliant 2026-10-14

//! Merge command: collects source identifiers and runs the coordinator.

use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use linemerge_core::{
    Destination, LineOrder, MergeConfig, MergeCoordinator, MergeReport, SourceId,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Inputs for one merge invocation.
#[derive(Debug, Clone, Default)]
pub struct MergeArgs {
    /// Source identifiers given on the command line.
    pub sources: Vec<String>,
    /// Optional file listing one source identifier per line.
    pub sources_from: Option<PathBuf>,
    /// Destination path.
    pub output: PathBuf,
    /// Order override.
    pub order: Option<LineOrder>,
    /// Concurrency cap override.
    pub jobs: Option<usize>,
    /// Optional TOML configuration file.
    pub config: Option<PathBuf>,
    /// Whether to print progress lines on stderr.
    pub progress: bool,
    /// Whether progress lines may use color.
    pub use_color: bool,
}

/// Runs a merge.
///
/// # Arguments
///
/// * `args` - Parsed command-line inputs
///
/// # Returns
///
/// The report of the completed merge.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or source list cannot be loaded
/// - Any source cannot be read
/// - The destination cannot be written
pub fn execute(args: MergeArgs) -> Result<MergeReport> {
    let config = resolve_config(&args)?;
    let sources = collect_sources(&args.sources, args.sources_from.as_deref())?;

    tracing::debug!(
        sources = sources.len(),
        order = %config.order,
        max_concurrency = ?config.max_concurrency,
        "resolved merge inputs"
    );

    let mut coordinator = MergeCoordinator::from_config(&config)?;
    if args.progress {
        let reporter = ProgressReporter::new("Reading sources", 1, args.use_color);
        coordinator = coordinator.with_observer(Arc::new(reporter));
    }

    let report = coordinator.merge(&sources, &Destination::new(&args.output))?;
    Ok(report)
}

/// Loads configuration and applies command-line overrides.
///
/// # Errors
///
/// Returns an error if the configuration file or overrides are invalid.
pub fn resolve_config(args: &MergeArgs) -> Result<MergeConfig> {
    let mut config = MergeConfig::load(args.config.as_deref())?;
    if let Some(order) = args.order {
        config.order = order;
    }
    if let Some(jobs) = args.jobs {
        config.max_concurrency = Some(jobs);
    }
    config.validate()?;
    Ok(config)
}

/// Combines positional sources with those listed in `sources_from`.
///
/// Listed identifiers follow the positional ones. Blank lines in the list
/// file are skipped.
///
/// # Errors
///
/// Returns an error if the list file cannot be read.
pub fn collect_sources(positional: &[String], sources_from: Option<&Path>) -> Result<Vec<SourceId>> {
    let mut sources: Vec<SourceId> = positional.iter().cloned().map(SourceId::from).collect();

    if let Some(list) = sources_from {
        let content = std::fs::read_to_string(list)
            .with_context(|| format!("Failed to read source list {}", list.display()))?;
        sources.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(SourceId::from),
        );
    }

    Ok(sources)
}
