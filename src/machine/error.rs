//! State machine error types.

use crate::machine::owner::MachineId;
use thiserror::Error;

/// Errors that can occur while driving a state machine.
///
/// A rejected transition is not an error; it is reported as
/// [`Outcome::Rejected`](super::Outcome::Rejected).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Unknown event '{name}' in state '{state}'")]
    UnknownEvent { name: String, state: String },

    #[error("State bound at generation {presented} is retired; {machine} is at generation {current}")]
    RetiredState {
        machine: MachineId,
        presented: u64,
        current: u64,
    },

    #[error("Owner handle belongs to {found}, not {expected}")]
    ForeignOwner {
        expected: MachineId,
        found: MachineId,
    },
}
