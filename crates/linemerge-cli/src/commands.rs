// Rust guideline compliant 2026-10-14

//! Command implementations for the linemerge CLI.

pub mod merge;
