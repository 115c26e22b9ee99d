//! Registry that holds and delegates to the active strategy.

use crate::strategy::error::StrategyError;
use crate::strategy::Strategy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Shared handle to a strategy.
///
/// Installing the same handle twice leaves the registry delegating to the
/// same object, so repeated installs are idempotent.
pub type SharedStrategy<I, O> = Arc<dyn Strategy<I, O>>;

/// Context owning one active strategy plus a catalogue of named ones.
///
/// The active slot is a single mutable value: `set_behavior` replaces it
/// unconditionally and the last write wins. The registry does no locking
/// of its own; wrap it in [`Shared`](crate::Shared) to use it from
/// several threads.
pub struct StrategyRegistry<I = (), O = ()> {
    active: Option<SharedStrategy<I, O>>,
    catalog: HashMap<String, SharedStrategy<I, O>>,
}

impl<I: 'static, O: 'static> StrategyRegistry<I, O> {
    /// Create a registry with no active strategy.
    pub fn new() -> Self {
        Self {
            active: None,
            catalog: HashMap::new(),
        }
    }

    /// Create a registry with `strategy` already active.
    pub fn with_behavior<B>(strategy: B) -> Self
    where
        B: Strategy<I, O> + 'static,
    {
        let mut registry = Self::new();
        registry.set_behavior(strategy);
        registry
    }

    /// Replace the active strategy, returning the one it released.
    pub fn set_behavior<B>(&mut self, strategy: B) -> Option<SharedStrategy<I, O>>
    where
        B: Strategy<I, O> + 'static,
    {
        self.set_shared(Arc::new(strategy))
    }

    /// Replace the active strategy with a shared handle, returning the one
    /// it released.
    pub fn set_shared(&mut self, strategy: SharedStrategy<I, O>) -> Option<SharedStrategy<I, O>> {
        debug!(
            strategy = strategy.name(),
            previous = self.active_name(),
            "installing strategy"
        );
        self.active.replace(strategy)
    }

    /// Empty the active slot, returning the strategy it held.
    pub fn clear(&mut self) -> Option<SharedStrategy<I, O>> {
        self.active.take()
    }

    /// Name of the active strategy, if any.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.name())
    }

    /// Check whether a strategy is active.
    pub fn is_set(&self) -> bool {
        self.active.is_some()
    }

    /// Run the active strategy on `input`.
    ///
    /// Fails with [`StrategyError::Uninitialized`] when the slot is empty.
    #[instrument(level = "trace", skip_all)]
    pub fn run(&self, input: I) -> Result<O, StrategyError> {
        let strategy = self.active.as_ref().ok_or(StrategyError::Uninitialized)?;
        trace!(strategy = strategy.name(), "executing strategy");
        Ok(strategy.execute(input))
    }

    /// Add a strategy to the catalogue under its own name without
    /// activating it. Returns the entry it replaced.
    pub fn register<B>(&mut self, strategy: B) -> Option<SharedStrategy<I, O>>
    where
        B: Strategy<I, O> + 'static,
    {
        self.register_shared(Arc::new(strategy))
    }

    /// Add a shared strategy to the catalogue. Returns the entry it replaced.
    pub fn register_shared(
        &mut self,
        strategy: SharedStrategy<I, O>,
    ) -> Option<SharedStrategy<I, O>> {
        self.catalog.insert(strategy.name().to_string(), strategy)
    }

    /// Activate the catalogued strategy called `name`, returning the one
    /// it released.
    pub fn select(&mut self, name: &str) -> Result<Option<SharedStrategy<I, O>>, StrategyError> {
        let strategy = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| StrategyError::UnknownStrategy {
                name: name.to_string(),
            })?;
        Ok(self.set_shared(strategy))
    }

    /// Names of every catalogued strategy, sorted.
    pub fn registered(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.catalog.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<O: 'static> StrategyRegistry<(), O> {
    /// Run the active input-less strategy.
    ///
    /// Fails with [`StrategyError::Uninitialized`] when the slot is empty.
    pub fn execute(&self) -> Result<O, StrategyError> {
        self.run(())
    }
}

impl<I: 'static, O: 'static> Default for StrategyRegistry<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> std::fmt::Debug for StrategyRegistry<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut catalog: Vec<&str> = self.catalog.keys().map(String::as_str).collect();
        catalog.sort_unstable();
        f.debug_struct("StrategyRegistry")
            .field("active", &self.active.as_ref().map(|s| s.name()))
            .field("catalog", &catalog)
            .finish()
    }
}
