//! Swappable algorithms behind a single slot.
//!
//! A [`Strategy`] is one interchangeable implementation of an algorithm.
//! A [`StrategyRegistry`] holds exactly one active strategy and delegates
//! to it; replacing the strategy changes what the next call runs without
//! the caller knowing the concrete type.
//!
//! # Example
//!
//! ```rust
//! use switchyard::strategy::{FnStrategy, StrategyError, StrategyRegistry};
//!
//! let mut registry: StrategyRegistry<(), &str> = StrategyRegistry::new();
//! assert_eq!(registry.execute(), Err(StrategyError::Uninitialized));
//!
//! registry.set_behavior(FnStrategy::new("b", |()| "run strategy algo B"));
//! assert_eq!(registry.execute(), Ok("run strategy algo B"));
//!
//! registry.set_behavior(FnStrategy::new("a", |()| "run strategy algo A"));
//! assert_eq!(registry.execute(), Ok("run strategy algo A"));
//! ```

mod error;
mod registry;

pub use error::StrategyError;
pub use registry::{SharedStrategy, StrategyRegistry};

/// One interchangeable implementation of an algorithm.
///
/// `I` is the algorithm's input and `O` its result; input-less
/// algorithms use the default `()`.
pub trait Strategy<I = (), O = ()>: Send + Sync {
    /// Name used to register, select and log the strategy.
    fn name(&self) -> &str;

    /// Run the algorithm.
    fn execute(&self, input: I) -> O;
}

/// Adapts a closure into a named [`Strategy`].
///
/// # Example
///
/// ```rust
/// use switchyard::strategy::{FnStrategy, Strategy};
///
/// let double = FnStrategy::new("double", |x: i32| x * 2);
///
/// assert_eq!(double.name(), "double");
/// assert_eq!(double.execute(21), 42);
/// ```
pub struct FnStrategy<I, O> {
    name: String,
    run: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> FnStrategy<I, O> {
    /// Wrap `run` under `name`.
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }
}

impl<I, O> Strategy<I, O> for FnStrategy<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, input: I) -> O {
        (self.run)(input)
    }
}

impl<I, O> std::fmt::Debug for FnStrategy<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
