//! State machines whose active state decides the next one.
//!
//! A [`StateMachine`] owns exactly one active state. Each event is handed
//! to a [`Transitions`] source, either the states themselves
//! ([`StateBehavior`] via [`Intrinsic`]) or a [`TransitionTable`], which
//! answers with a [`Decision`]. The caller gets an [`Outcome`] back.
//!
//! # Owner handles
//!
//! Every active state is bound to an [`Owner`] naming its machine and the
//! generation at which it became active. The handle is passed into
//! [`StateMachine::fire_as`] explicitly instead of being stored inside the
//! state, so there is no reference cycle, and a state retired by a later
//! transition can no longer drive the machine.

mod decision;
mod error;
mod owner;
mod state_machine;
mod table;

pub use decision::{Decision, Outcome};
pub use error::MachineError;
pub use owner::{Bound, MachineId, Owner};
pub use state_machine::{Intrinsic, StateBehavior, StateMachine, Transitions};
pub use table::{TransitionTable, UNDEFINED_TRANSITION};
