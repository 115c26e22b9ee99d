//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring closed
//! state, event and element sets and wiring them into machines with
//! minimal boilerplate while keeping exhaustiveness checks.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::{BuildError, TableViolation};
pub use machine::StateMachineBuilder;
pub use table::TransitionTableBuilder;
