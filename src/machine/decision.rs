//! Decisions made by states and the outcomes reported to callers.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// What the active state decides to do with an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision<S> {
    /// Install `S` as the new active state
    Advance(S),

    /// Stay put; the event does not apply here
    Reject { reason: String },
}

impl<S> Decision<S> {
    /// Shorthand for [`Decision::Reject`].
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
        }
    }
}

/// Result of handling one event.
///
/// Both variants are normal results: "can't do that from here" is a valid
/// answer, not a failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Outcome<S: State> {
    /// The machine moved from one state to another
    Moved { from: S, to: S, event: String },

    /// The active state refused the event and is still active
    Rejected {
        state: S,
        event: String,
        reason: String,
    },
}

impl<S: State> Outcome<S> {
    /// Check if the machine moved.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Check if the event was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The state that is active after the event.
    pub fn state(&self) -> &S {
        match self {
            Self::Moved { to, .. } => to,
            Self::Rejected { state, .. } => state,
        }
    }

    /// Name of the event that produced this outcome.
    pub fn event(&self) -> &str {
        match self {
            Self::Moved { event, .. } | Self::Rejected { event, .. } => event,
        }
    }
}
