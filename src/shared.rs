//! External mutual exclusion for contexts shared between threads.
//!
//! Registries and machines do no locking of their own. `Shared` is the
//! wrapper callers put around one when several threads drive it: the lock
//! is taken before a swap or transition and released after.

use std::sync::{Arc, Mutex, PoisonError, TryLockError};
use tracing::warn;

/// A context behind an `Arc<Mutex<_>>`.
///
/// Clones share the same context.
///
/// # Example
///
/// ```rust
/// use switchyard::elevator::{Button, Floor};
/// use switchyard::machine::StateMachine;
/// use switchyard::Shared;
/// use std::thread;
///
/// let elevator = Shared::new(StateMachine::new(Floor::Ground));
///
/// let worker = elevator.clone();
/// thread::spawn(move || worker.with(|m| m.fire(Button::Up)))
///     .join()
///     .unwrap();
///
/// assert_eq!(elevator.with(|m| *m.current_state()), Floor::Middle);
/// ```
pub struct Shared<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Shared<C> {
    /// Wrap `context` for shared use.
    pub fn new(context: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Run `f` with exclusive access to the context.
    ///
    /// A lock poisoned by a panic in another holder is recovered: every
    /// context operation either completes its single-slot swap or leaves
    /// the slot untouched, so the value is still consistent.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("context lock was poisoned, recovering");
            poisoned.into_inner()
        });
        f(&mut *guard)
    }

    /// Take the context back if this is the last handle.
    ///
    /// Returns `Err(self)` while other clones are alive.
    pub fn into_inner(self) -> Result<C, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Shared<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_tuple("Shared");
        match self.inner.try_lock() {
            Ok(guard) => d.field(&*guard),
            Err(TryLockError::Poisoned(poisoned)) => d.field(&*poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => d.field(&format_args!("<locked>")),
        };
        d.finish()
    }
}
