//! Builder for constructing transition tables.

use crate::builder::error::{BuildError, TableViolation};
use crate::core::{Closed, Event, State};
use crate::machine::{Decision, TransitionTable};
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Builder for transition tables with a fluent API.
///
/// Validation does not stop at the first problem: every duplicate and
/// every missing rule is collected into one [`BuildError::InvalidTable`].
///
/// # Example
///
/// ```rust
/// use switchyard::builder::TransitionTableBuilder;
/// use switchyard::elevator::{Button, Floor};
/// use switchyard::machine::StateMachine;
///
/// let table = TransitionTableBuilder::new()
///     .on(Floor::Ground, Button::Up, Floor::Middle)
///     .reject(Floor::Ground, Button::Down, "can't go down")
///     .on(Floor::Middle, Button::Up, Floor::Top)
///     .on(Floor::Middle, Button::Down, Floor::Ground)
///     .reject(Floor::Top, Button::Up, "can't go up")
///     .on(Floor::Top, Button::Down, Floor::Middle)
///     .build_exhaustive()
///     .unwrap();
///
/// let mut machine = StateMachine::with_transitions(Floor::Ground, table);
/// assert!(machine.handle_event("up").unwrap().is_moved());
/// ```
pub struct TransitionTableBuilder<S: State, E: Event> {
    rules: Vec<(S, E, Decision<S>)>,
}

impl<S: State, E: Event> TransitionTableBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Move from `from` to `to` on `event`.
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.rules.push((from, event, Decision::Advance(to)));
        self
    }

    /// Refuse `event` while in `state`, reporting `reason`.
    pub fn reject(mut self, state: S, event: E, reason: impl Into<String>) -> Self {
        self.rules.push((state, event, Decision::reject(reason)));
        self
    }

    /// Build the table.
    /// Returns an error if any (state, event) pair has more than one rule.
    /// Pairs without a rule reject at runtime.
    pub fn build(self) -> Result<TransitionTable<S, E>, BuildError>
    where
        S: Eq + Hash,
        E: Eq + Hash,
    {
        into_result(self.duplicate_checks())?;
        Ok(TransitionTable::from_rules(self.rules))
    }

    /// Build the table, also requiring a rule for every (state, event)
    /// pair of the closed state and event sets.
    pub fn build_exhaustive(self) -> Result<TransitionTable<S, E>, BuildError>
    where
        S: Closed + Eq + Hash,
        E: Closed + Eq + Hash,
    {
        let mut checks = self.duplicate_checks();
        checks.extend(self.coverage_checks());
        into_result(checks)?;
        Ok(TransitionTable::from_rules(self.rules))
    }

    fn duplicate_checks(&self) -> Vec<Check> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, (state, event, _))| {
                let earlier = self.rules[..index]
                    .iter()
                    .filter(|(s, e, _)| s == state && e == event)
                    .count();
                // Each duplicated pair is reported once, at its second rule.
                if earlier == 1 {
                    Validation::fail(TableViolation::DuplicateRule {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                    })
                } else {
                    Validation::success(())
                }
            })
            .collect()
    }

    fn coverage_checks(&self) -> Vec<Check>
    where
        S: Closed,
        E: Closed,
    {
        S::VARIANTS
            .iter()
            .flat_map(|state| E::VARIANTS.iter().map(move |event| (state, event)))
            .map(|(state, event)| {
                let covered = self.rules.iter().any(|(s, e, _)| s == state && e == event);
                if covered {
                    Validation::success(())
                } else {
                    Validation::fail(TableViolation::MissingRule {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                    })
                }
            })
            .collect()
    }
}

impl<S: State, E: Event> Default for TransitionTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn into_result(checks: Vec<Check>) -> Result<(), BuildError> {
    Validation::all_vec(checks)
        .into_result()
        .map(|_| ())
        .map_err(|violations| BuildError::InvalidTable {
            violations: violations.into_vec(),
        })
}
