//! Owner handles binding an active state to its machine.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MACHINE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one [`StateMachine`](super::StateMachine).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct MachineId(u64);

impl MachineId {
    pub(crate) fn next() -> Self {
        Self(NEXT_MACHINE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric identity.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "machine-{}", self.0)
    }
}

/// Handle naming the machine that owns a state, and the generation at
/// which that state became active.
///
/// The generation increases by one on every transition, so a handle taken
/// before a transition no longer matches the machine and cannot be used to
/// drive it.
///
/// Only a machine mints handles. They serialize for logging but cannot be
/// deserialized or constructed outside the crate:
///
/// ```compile_fail
/// use switchyard::machine::Owner;
///
/// let forged: Owner = serde_json::from_str(r#"{"machine":1,"generation":0}"#).unwrap();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Owner {
    machine: MachineId,
    generation: u64,
}

impl Owner {
    pub(crate) fn initial(machine: MachineId) -> Self {
        Self {
            machine,
            generation: 0,
        }
    }

    pub(crate) fn successor(self) -> Self {
        Self {
            machine: self.machine,
            generation: self.generation + 1,
        }
    }

    /// The owning machine.
    pub fn machine(&self) -> MachineId {
        self.machine
    }

    /// Number of transitions the machine had made when this state was
    /// installed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A state together with its owner handle.
///
/// The pair is only ever replaced as a whole, so an active state is never
/// observable without its owner.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Bound<S> {
    state: S,
    owner: Owner,
}

impl<S> Bound<S> {
    pub(crate) fn new(state: S, owner: Owner) -> Self {
        Self { state, owner }
    }

    /// The bound state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The owner handle set when the state became active.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub(crate) fn into_state(self) -> S {
        self.state
    }
}
