// Rust guideline compliant 2026-10-14

//! Linemerge Core Library
//!
//! This crate provides the concurrent multi-source line merge:
//! - Source identifiers and readers (UTF-8 files, line splitting)
//! - Merge coordinator (fan-out reads, join, sort, atomic write)
//! - Line orders (lexical, case-insensitive, reverse)
//! - Merge phase FSM and lifecycle observers
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod destination;
pub mod error;
pub mod fsm;
pub mod merge;
pub mod observer;
pub mod order;
pub mod source;

pub use config::MergeConfig;
pub use destination::Destination;
pub use error::{Error, ErrorCode, Result};
pub use fsm::{MergePhase, PhaseTracker};
pub use merge::{
    default_max_concurrency, merge_files, MergeCoordinator, MergeReport, READS_PER_CPU,
};
pub use observer::{MergeObserver, NoopObserver};
pub use order::LineOrder;
pub use source::{split_lines, FileSource, SourceId, SourceReader};
