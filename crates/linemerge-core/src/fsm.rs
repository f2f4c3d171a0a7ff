// Rust guideline compliant 2026-10-14

//! Finite State Machine for a single merge call.
//!
//! The FSM enforces the following transitions:
//!
//! - Pending → Gathering
//! - Gathering → Sorting
//! - Sorting → Writing
//! - Writing → Done
//! - Gathering, Sorting, Writing → Failed
//!
//! `Done` and `Failed` are terminal. A failed merge is never resumed.

use crate::{Error, Result};
use serde::Serialize;

/// Lifecycle phase of one merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergePhase {
    /// Created, no reads issued yet.
    #[default]
    Pending,
    /// Source reads are outstanding.
    Gathering,
    /// All reads succeeded, lines are being sorted.
    Sorting,
    /// Sorted lines are being written to the destination.
    Writing,
    /// The destination holds the complete merge.
    Done,
    /// The merge failed; nothing partial was published.
    Failed,
}

impl MergePhase {
    /// Checks if a transition to the target phase is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the transition is not in the
    /// valid transition set.
    pub fn can_transition_to(&self, target: MergePhase) -> Result<()> {
        if self.valid_transitions().contains(&target) {
            return Ok(());
        }

        Err(Error::InvalidTransition(format!(
            "Cannot transition from {:?} to {:?}",
            self, target
        )))
    }

    /// Returns the list of valid target phases for the current phase.
    pub fn valid_transitions(&self) -> Vec<MergePhase> {
        match self {
            MergePhase::Pending => vec![MergePhase::Gathering],
            MergePhase::Gathering => vec![MergePhase::Sorting, MergePhase::Failed],
            MergePhase::Sorting => vec![MergePhase::Writing, MergePhase::Failed],
            MergePhase::Writing => vec![MergePhase::Done, MergePhase::Failed],
            MergePhase::Done | MergePhase::Failed => Vec::new(),
        }
    }

    /// Returns true for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MergePhase::Done | MergePhase::Failed)
    }
}

/// Tracks the phase of a merge call and rejects illegal moves.
#[derive(Debug, Default)]
pub struct PhaseTracker {
    phase: MergePhase,
}

impl PhaseTracker {
    /// Creates a tracker in the `Pending` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MergePhase {
        self.phase
    }

    /// Moves to `target` if the transition is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition violates FSM rules.
    pub fn advance(&mut self, target: MergePhase) -> Result<()> {
        self.phase.can_transition_to(target)?;
        tracing::debug!(from = ?self.phase, to = ?target, "merge phase transition");
        self.phase = target;
        Ok(())
    }
}
