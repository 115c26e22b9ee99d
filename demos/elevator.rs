//! Elevator
//!
//! This demo drives the three-floor elevator through a sequence of button
//! presses, first with floors deciding their own transitions and then with
//! the same rules as a checked transition table.
//!
//! Key concepts:
//! - States decide the next state; the machine only holds the active one
//! - Rejected events leave the car where it is and report a reason
//! - Retired owner handles are refused
//!
//! Run with: RUST_LOG=debug cargo run --example elevator

use switchyard::builder::StateMachineBuilder;
use switchyard::elevator::{elevator, elevator_table, Button, Floor};
use switchyard::machine::Outcome;
use tracing_subscriber::EnvFilter;

fn describe(outcome: &Outcome<Floor>) -> String {
    match outcome {
        Outcome::Moved { from, to, event } => format!("{event}: {from:?} -> {to:?}"),
        Outcome::Rejected { state, event, reason } => {
            format!("{event}: stays at {state:?} ({reason})")
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Elevator Example ===\n");

    let mut car = elevator();
    println!("Machine {} starts at {:?}", car.id(), car.current_state());

    let presses = ["up", "up", "down", "down", "down"];
    for outcome in car.run(presses).unwrap() {
        println!("  {}", describe(&outcome));
    }

    println!("\nUnknown buttons are refused:");
    match car.handle_event("sideways") {
        Ok(outcome) => println!("  {}", describe(&outcome)),
        Err(err) => println!("  {err}"),
    }

    println!("\nA handle from before a move is retired:");
    let stale = car.owner();
    car.fire(Button::Up);
    match car.fire_as(stale, Button::Down) {
        Ok(outcome) => println!("  {}", describe(&outcome)),
        Err(err) => println!("  {err}"),
    }

    println!("\nThe same rules as a table:");
    let mut table_car = StateMachineBuilder::new()
        .initial(Floor::Top)
        .transitions(elevator_table().unwrap())
        .build()
        .unwrap();
    for outcome in table_car.run(["up", "down", "down"]).unwrap() {
        println!("  {}", describe(&outcome));
    }

    println!("\n=== Example Complete ===");
}
