//! Build errors for state machine and transition table builders.

use thiserror::Error;

/// A single problem found while validating a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("More than one rule for event '{event}' in state '{state}'")]
    DuplicateRule { state: String, event: String },

    #[error("No rule for event '{event}' in state '{state}'")]
    MissingRule { state: String, event: String },
}

/// Errors that can occur when building state machines and tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source not specified. Call .transitions(source) before .build()")]
    MissingTransitions,

    #[error("Invalid transition table: {} violation(s)", .violations.len())]
    InvalidTable { violations: Vec<TableViolation> },
}
