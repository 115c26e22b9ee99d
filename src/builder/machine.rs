//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{StateMachine, Transitions};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, T: Transitions<S>> {
    initial: Option<S>,
    transitions: Option<T>,
}

impl<S: State, T: Transitions<S>> StateMachineBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition source (required).
    pub fn transitions(mut self, transitions: T) -> Self {
        self.transitions = Some(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S, T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let transitions = self.transitions.ok_or(BuildError::MissingTransitions)?;

        Ok(StateMachine::with_transitions(initial, transitions))
    }
}

impl<S: State, T: Transitions<S>> Default for StateMachineBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransitionTableBuilder;
    use crate::machine::{Decision, Intrinsic, StateBehavior, TransitionTable};

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
        final: [Complete]
    }

    crate::event_enum! {
        enum TestEvent {
            Go => "go",
        }
    }

    impl StateBehavior for TestState {
        type Event = TestEvent;

        fn on_event(&self, event: &TestEvent) -> Decision<Self> {
            match (self, event) {
                (TestState::Initial, TestEvent::Go) => Decision::Advance(TestState::Processing),
                (TestState::Processing, TestEvent::Go) => Decision::Advance(TestState::Complete),
                (TestState::Complete, TestEvent::Go) => Decision::reject("already complete"),
            }
        }
    }

    #[test]
    fn builder_validates_initial_state() {
        let result = StateMachineBuilder::<TestState, Intrinsic>::new()
            .transitions(Intrinsic)
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = StateMachineBuilder::<TestState, Intrinsic>::new()
            .initial(TestState::Initial)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTransitions)));
    }

    #[test]
    fn fluent_api_builds_intrinsic_machine() {
        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .transitions(Intrinsic)
            .build()
            .unwrap();

        machine.fire(TestEvent::Go);
        machine.fire(TestEvent::Go);

        assert_eq!(machine.current_state(), &TestState::Complete);
        assert!(machine.is_final());
    }

    #[test]
    fn fluent_api_builds_table_machine() {
        let table: TransitionTable<TestState, TestEvent> = TransitionTableBuilder::new()
            .on(TestState::Initial, TestEvent::Go, TestState::Complete)
            .build()
            .unwrap();

        let mut machine = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .transitions(table)
            .build()
            .unwrap();

        assert!(machine.fire(TestEvent::Go).is_moved());
        assert_eq!(machine.current_state(), &TestState::Complete);
        assert!(machine.fire(TestEvent::Go).is_rejected());
    }
}
