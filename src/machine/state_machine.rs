//! State machine that swaps its active state in response to events.

use crate::core::{Event, State};
use crate::machine::decision::{Decision, Outcome};
use crate::machine::error::MachineError;
use crate::machine::owner::{Bound, MachineId, Owner};
use tracing::{debug, instrument};

/// A state that decides its own transitions.
///
/// Implement this on a closed state enum and `match` on `(self, event)`
/// with no fallback arm; every pair then has an explicit answer and a new
/// state or event variant will not compile until it is handled.
pub trait StateBehavior: State {
    /// Events this state set recognises.
    type Event: Event;

    /// Decide what to do with `event` while this state is active.
    fn on_event(&self, event: &Self::Event) -> Decision<Self>;
}

/// Source of transition decisions for a machine.
pub trait Transitions<S: State> {
    /// Events the machine recognises.
    type Event: Event;

    /// Decide what the active `state` does with `event`.
    fn decide(&self, state: &S, event: &Self::Event) -> Decision<S>;
}

/// Transitions supplied by the states themselves through
/// [`StateBehavior`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intrinsic;

impl<S: StateBehavior> Transitions<S> for Intrinsic {
    type Event = S::Event;

    fn decide(&self, state: &S, event: &Self::Event) -> Decision<S> {
        state.on_event(event)
    }
}

/// Context holding exactly one active state.
///
/// Handling an event asks the transition source for a [`Decision`]. An
/// `Advance` installs the next state and its owner handle in a single
/// assignment; a `Reject` leaves everything untouched. There is no queue
/// and no history: each call is answered immediately.
pub struct StateMachine<S: State, T: Transitions<S> = Intrinsic> {
    id: MachineId,
    active: Bound<S>,
    transitions: T,
}

impl<S: StateBehavior> StateMachine<S, Intrinsic> {
    /// Create a machine whose states decide their own transitions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::elevator::{Button, Floor};
    /// use switchyard::machine::StateMachine;
    ///
    /// let mut machine = StateMachine::new(Floor::Ground);
    ///
    /// assert!(machine.fire(Button::Up).is_moved());
    /// assert_eq!(machine.current_state(), &Floor::Middle);
    ///
    /// machine.fire(Button::Down);
    /// assert!(machine.fire(Button::Down).is_rejected());
    /// assert_eq!(machine.current_state(), &Floor::Ground);
    /// ```
    pub fn new(initial: S) -> Self {
        Self::with_transitions(initial, Intrinsic)
    }
}

impl<S: State, T: Transitions<S>> StateMachine<S, T> {
    /// Create a machine in `initial` that consults `transitions`.
    pub fn with_transitions(initial: S, transitions: T) -> Self {
        let id = MachineId::next();
        Self {
            id,
            active: Bound::new(initial, Owner::initial(id)),
            transitions,
        }
    }

    /// This machine's identity.
    pub fn id(&self) -> MachineId {
        self.id
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        self.active.state()
    }

    /// Get the active state together with its owner handle (pure)
    pub fn active(&self) -> &Bound<S> {
        &self.active
    }

    /// Owner handle of the active state (pure)
    pub fn owner(&self) -> Owner {
        self.active.owner()
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.active.state().is_final()
    }

    /// The transition source (pure)
    pub fn transitions(&self) -> &T {
        &self.transitions
    }

    /// Apply a typed event to the active state.
    pub fn fire(&mut self, event: T::Event) -> Outcome<S> {
        let decision = self.transitions.decide(self.active.state(), &event);
        self.apply(decision, &event)
    }

    /// Apply `event` on behalf of the state bound to `owner`.
    ///
    /// Only the active state may drive the machine: a handle from another
    /// machine, or one taken before the latest transition, is refused and
    /// nothing changes.
    pub fn fire_as(&mut self, owner: Owner, event: T::Event) -> Result<Outcome<S>, MachineError> {
        let current = self.active.owner();
        if owner.machine() != self.id {
            return Err(MachineError::ForeignOwner {
                expected: self.id,
                found: owner.machine(),
            });
        }
        if owner.generation() != current.generation() {
            return Err(MachineError::RetiredState {
                machine: self.id,
                presented: owner.generation(),
                current: current.generation(),
            });
        }
        Ok(self.fire(event))
    }

    /// Apply the event recognised by `name`.
    ///
    /// Fails with [`MachineError::UnknownEvent`] if no event has that
    /// name; the active state is unchanged in that case.
    #[instrument(level = "trace", skip(self), fields(machine = %self.id))]
    pub fn handle_event(&mut self, name: &str) -> Result<Outcome<S>, MachineError> {
        let event = <T::Event as Event>::parse(name).ok_or_else(|| MachineError::UnknownEvent {
            name: name.to_string(),
            state: self.active.state().name().to_string(),
        })?;
        Ok(self.fire(event))
    }

    /// Apply a sequence of event names in order.
    ///
    /// Returns every outcome, rejected ones included. Stops at the first
    /// unrecognised name; events before it have already been applied.
    pub fn run<I, N>(&mut self, names: I) -> Result<Vec<Outcome<S>>, MachineError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.handle_event(name.as_ref()))
            .collect()
    }

    fn apply(&mut self, decision: Decision<S>, event: &T::Event) -> Outcome<S> {
        match decision {
            Decision::Advance(next) => {
                let owner = self.active.owner().successor();
                let retired =
                    std::mem::replace(&mut self.active, Bound::new(next.clone(), owner));
                let from = retired.into_state();
                debug!(
                    machine = %self.id,
                    from = from.name(),
                    to = next.name(),
                    event = event.name(),
                    generation = owner.generation(),
                    "state transition"
                );
                Outcome::Moved {
                    from,
                    to: next,
                    event: event.name().to_string(),
                }
            }
            Decision::Reject { reason } => {
                debug!(
                    machine = %self.id,
                    state = self.active.state().name(),
                    event = event.name(),
                    reason = %reason,
                    "transition rejected"
                );
                Outcome::Rejected {
                    state: self.active.state().clone(),
                    event: event.name().to_string(),
                    reason,
                }
            }
        }
    }
}

impl<S: State, T: Transitions<S>> std::fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
