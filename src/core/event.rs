//! Events that drive state transitions.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the events a state machine recognises.
///
/// Every event has a stable textual name so callers can drive a machine
/// from untyped input (`"up"`, `"down"`). `parse` is the inverse of
/// `name` and returns `None` for names outside the recognised set.
///
/// Most event types are generated with [`event_enum!`](crate::event_enum).
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Signal {
///     Start,
///     Stop,
/// }
///
/// impl Event for Signal {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "start",
///             Self::Stop => "stop",
///         }
///     }
///
///     fn parse(name: &str) -> Option<Self> {
///         match name {
///             "start" => Some(Self::Start),
///             "stop" => Some(Self::Stop),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Signal::parse("stop"), Some(Signal::Stop));
/// assert_eq!(Signal::parse("pause"), None);
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + Sized
{
    /// The event's recognised name.
    fn name(&self) -> &str;

    /// Resolve a recognised name back into an event.
    fn parse(name: &str) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Knob {
        Left,
        Right,
    }

    impl Event for Knob {
        fn name(&self) -> &str {
            match self {
                Self::Left => "left",
                Self::Right => "right",
            }
        }

        fn parse(name: &str) -> Option<Self> {
            match name {
                "left" => Some(Self::Left),
                "right" => Some(Self::Right),
                _ => None,
            }
        }
    }

    #[test]
    fn parse_inverts_name() {
        for event in [Knob::Left, Knob::Right] {
            assert_eq!(Knob::parse(event.name()), Some(event));
        }
    }

    #[test]
    fn parse_rejects_unrecognised_names() {
        assert_eq!(Knob::parse("LEFT"), None);
        assert_eq!(Knob::parse(""), None);
    }
}
