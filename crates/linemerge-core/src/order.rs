// Rust guideline compliant 2026-10-14

//! Total orders used to sort merged lines.

use crate::Error;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparison applied to the merged lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineOrder {
    /// Byte-wise lexicographic order.
    #[default]
    Lexical,
    /// Lexicographic order of the lowercased lines, ties broken lexically.
    CaseInsensitive,
    /// Descending lexicographic order.
    Reverse,
}

impl LineOrder {
    /// Compares two lines under this order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            LineOrder::Lexical => a.cmp(b),
            LineOrder::CaseInsensitive => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            LineOrder::Reverse => b.cmp(a),
        }
    }

    /// Sorts lines in place.
    ///
    /// Equal lines are indistinguishable under every variant, so an unstable
    /// sort yields the same output as a stable one.
    pub fn sort(&self, lines: &mut [String]) {
        match self {
            LineOrder::Lexical => lines.par_sort_unstable(),
            LineOrder::CaseInsensitive => {
                lines.par_sort_by_cached_key(|line| (line.to_lowercase(), line.clone()))
            }
            LineOrder::Reverse => lines.par_sort_unstable_by(|a, b| b.cmp(a)),
        }
    }

    /// Returns true if `lines` is non-decreasing under this order.
    pub fn is_sorted<S: AsRef<str>>(&self, lines: &[S]) -> bool {
        lines
            .windows(2)
            .all(|w| self.compare(w[0].as_ref(), w[1].as_ref()) != Ordering::Greater)
    }

    /// Returns the configuration name of the order.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineOrder::Lexical => "lexical",
            LineOrder::CaseInsensitive => "case_insensitive",
            LineOrder::Reverse => "reverse",
        }
    }
}

impl fmt::Display for LineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lexical" => Ok(LineOrder::Lexical),
            "case_insensitive" => Ok(LineOrder::CaseInsensitive),
            "reverse" => Ok(LineOrder::Reverse),
            other => Err(Error::InvalidConfig(format!(
                "Unknown line order '{}'. Expected lexical, case_insensitive, or reverse",
                other
            ))),
        }
    }
}
