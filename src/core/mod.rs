//! Core state machine vocabulary.
//!
//! This module contains the pure vocabulary shared by every machine:
//! - State definitions via the `State` trait
//! - Recognised events via the `Event` trait
//! - Closed variant sets via the `Closed` trait
//!
//! Nothing here mutates anything; the machine in [`crate::machine`]
//! is the only place a state is ever swapped.

mod closed;
mod event;
mod state;

pub use closed::Closed;
pub use event::Event;
pub use state::State;
