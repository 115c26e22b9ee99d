//! Closed, enumerable variant sets.

/// A type whose values form a fixed set known at compile time.
///
/// Implemented by the enums generated with [`state_enum!`](crate::state_enum)
/// and [`event_enum!`](crate::event_enum). Transition tables use it to
/// check that every (state, event) pair has a rule.
pub trait Closed: Sized + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];
}
