//! Data-driven transitions keyed by state and event.

use crate::core::{Event, State};
use crate::machine::decision::Decision;
use crate::machine::state_machine::Transitions;
use std::collections::HashMap;
use std::hash::Hash;

/// Reason reported for a (state, event) pair that has no rule.
pub const UNDEFINED_TRANSITION: &str = "no transition defined";

/// Lookup table of transition rules.
///
/// Rules are keyed by the (state, event) values themselves, so states that
/// carry data or share a display name still get distinct rules. Pairs
/// without a rule reject with [`UNDEFINED_TRANSITION`]. Build one with
/// [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder).
pub struct TransitionTable<S: State, E: Event> {
    rules: HashMap<(S, E), Decision<S>>,
}

impl<S, E> TransitionTable<S, E>
where
    S: State + Eq + Hash,
    E: Event + Eq + Hash,
{
    pub(crate) fn from_rules(rules: Vec<(S, E, Decision<S>)>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(state, event, decision)| ((state, event), decision))
                .collect(),
        }
    }

    /// The rule for `state` and `event`, if one was defined.
    pub fn rule(&self, state: &S, event: &E) -> Option<&Decision<S>> {
        self.rules.get(&(state.clone(), event.clone()))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S, E> Transitions<S> for TransitionTable<S, E>
where
    S: State + Eq + Hash,
    E: Event + Eq + Hash,
{
    type Event = E;

    fn decide(&self, state: &S, event: &E) -> Decision<S> {
        self.rule(state, event)
            .cloned()
            .unwrap_or_else(|| Decision::reject(UNDEFINED_TRANSITION))
    }
}

impl<S: State, E: Event> std::fmt::Debug for TransitionTable<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionTable")
            .field("rules", &self.rules)
            .finish()
    }
}
