//! Three-floor elevator, the reference machine for this crate.
//!
//! ```text
//!  Ground --up--> Middle --up--> Top
//!  Ground <-down- Middle <-down- Top
//! ```
//!
//! Pressing down on the ground floor or up on the top floor is rejected
//! and leaves the car where it is. There is no terminal floor.

use crate::builder::{BuildError, TransitionTableBuilder};
use crate::machine::{Decision, StateBehavior, StateMachine, TransitionTable};

crate::state_enum! {
    /// Floor the car is at.
    pub enum Floor {
        Ground,
        Middle,
        Top,
    }
}

crate::event_enum! {
    /// Call buttons inside the car.
    pub enum Button {
        Up => "up",
        Down => "down",
    }
}

impl StateBehavior for Floor {
    type Event = Button;

    fn on_event(&self, event: &Button) -> Decision<Self> {
        match (self, event) {
            (Floor::Ground, Button::Up) => Decision::Advance(Floor::Middle),
            (Floor::Ground, Button::Down) => {
                Decision::reject("can't go down from the ground floor")
            }
            (Floor::Middle, Button::Up) => Decision::Advance(Floor::Top),
            (Floor::Middle, Button::Down) => Decision::Advance(Floor::Ground),
            (Floor::Top, Button::Up) => Decision::reject("can't go up from the top floor"),
            (Floor::Top, Button::Down) => Decision::Advance(Floor::Middle),
        }
    }
}

/// Elevator whose floors decide their own transitions.
pub type Elevator = StateMachine<Floor>;

/// A new elevator waiting at the ground floor.
pub fn elevator() -> Elevator {
    StateMachine::new(Floor::Ground)
}

/// The same rules as [`Floor`]'s `StateBehavior`, as a checked table.
pub fn elevator_table() -> Result<TransitionTable<Floor, Button>, BuildError> {
    TransitionTableBuilder::new()
        .on(Floor::Ground, Button::Up, Floor::Middle)
        .reject(Floor::Ground, Button::Down, "can't go down from the ground floor")
        .on(Floor::Middle, Button::Up, Floor::Top)
        .on(Floor::Middle, Button::Down, Floor::Ground)
        .reject(Floor::Top, Button::Up, "can't go up from the top floor")
        .on(Floor::Top, Button::Down, Floor::Middle)
        .build_exhaustive()
}
