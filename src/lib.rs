//! Switchyard: a pluggable-behavior engine
//!
//! Switchyard resolves, at call time, which concrete behavior runs for a
//! request, without the caller naming the concrete type. It has three
//! independent components:
//!
//! - **Strategies**: a [`StrategyRegistry`] holds one swappable algorithm
//!   and delegates to whichever is installed
//! - **State machines**: a [`StateMachine`] holds one active state that
//!   decides, per event, whether to hand over to another state
//! - **Visitors**: [`visitor::accept`] double-dispatches a closed element
//!   set onto the matching visitor operation
//!
//! Everything is synchronous and single-threaded. Contexts carry no locks;
//! wrap one in [`Shared`] to drive it from several threads.
//!
//! # Example
//!
//! ```rust
//! use switchyard::elevator::{elevator, Floor};
//!
//! let mut car = elevator();
//! let outcomes = car.run(["up", "up", "down", "down", "down"]).unwrap();
//!
//! assert_eq!(car.current_state(), &Floor::Ground);
//! assert!(outcomes.last().unwrap().is_rejected());
//! ```

pub mod builder;
pub mod core;
pub mod elevator;
pub mod machine;
pub mod shared;
pub mod strategy;
pub mod visitor;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionTableBuilder};
pub use crate::core::{Closed, Event, State};
pub use machine::{Decision, MachineError, Outcome, StateBehavior, StateMachine};
pub use shared::Shared;
pub use strategy::{FnStrategy, Strategy, StrategyError, StrategyRegistry};
