//! Tag of the last mutating operation.
//!
//! Redo eligibility depends on what happened immediately before, so the
//! machine records the kind of every mutating call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of the last mutating call on a machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Nothing has happened since construction, `reset` or `clear_history`.
    #[default]
    None,
    /// Direct state assignment.
    Change,
    /// Event-driven transition.
    Trigger,
    /// Successful undo.
    Undo,
    /// Successful redo.
    Redo,
}

impl Operation {
    /// Whether a redo may follow this operation.
    ///
    /// Only an undo, or a redo chained after one, leaves the redo buffer
    /// eligible for replay.
    pub fn allows_redo(self) -> bool {
        matches!(self, Self::Undo | Self::Redo)
    }

    /// Whether this operation moved the machine forward to a new state.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Change | Self::Trigger)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Change => "change",
            Self::Trigger => "trigger",
            Self::Undo => "undo",
            Self::Redo => "redo",
        };
        f.write_str(name)
    }
}
