//! Strategy registry error types.

use thiserror::Error;

/// Errors returned by [`StrategyRegistry`](super::StrategyRegistry).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// No strategy has been installed yet, or the slot was cleared
    #[error("No strategy installed. Call .set_behavior() or .select() before executing")]
    Uninitialized,

    /// `select` named a strategy that was never registered
    #[error("No strategy named '{name}' is registered")]
    UnknownStrategy { name: String },
}
