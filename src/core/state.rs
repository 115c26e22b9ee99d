//! Core State trait for state machine states.
//!
//! All state machine states implement this trait, which provides
//! pure methods for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values describing the current position of a
/// machine. A fresh value is installed on every transition; nothing is
/// shared between the retired state and its successor.
///
/// # Required Traits
///
/// - `Clone`: outcomes report both the retired and the installed state
/// - `PartialEq`: states must be comparable for assertions and tables
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: outcomes can be logged or persisted
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// assert!(!Door::Locked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Machines are free to cycle forever, so the default is `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Halted,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Halted => "Halted",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Halted)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Cyclic {
        Tick,
        Tock,
    }

    impl State for Cyclic {
        fn name(&self) -> &str {
            match self {
                Self::Tick => "Tick",
                Self::Tock => "Tock",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
        assert_eq!(TestState::Halted.name(), "Halted");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Busy.is_final());
        assert!(TestState::Halted.is_final());
    }

    #[test]
    fn is_final_defaults_to_false() {
        assert!(!Cyclic::Tick.is_final());
        assert!(!Cyclic::Tock.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
