//! Strategy Swap
//!
//! This demo installs interchangeable algorithms into a single slot and
//! swaps them at runtime, both directly and by registered name.
//!
//! Key concepts:
//! - The caller runs whatever strategy is installed without naming it
//! - Installing a strategy replaces the previous one
//! - Running with nothing installed is an error, not a panic
//!
//! Run with: RUST_LOG=debug cargo run --example strategy_swap

use switchyard::strategy::{FnStrategy, Strategy, StrategyRegistry};
use tracing_subscriber::EnvFilter;

/// Sorts ascending.
struct Ascending;

impl Strategy<Vec<i32>, Vec<i32>> for Ascending {
    fn name(&self) -> &str {
        "ascending"
    }

    fn execute(&self, mut input: Vec<i32>) -> Vec<i32> {
        input.sort_unstable();
        input
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Strategy Swap Example ===\n");

    let mut greeter: StrategyRegistry<(), &str> = StrategyRegistry::new();
    match greeter.execute() {
        Ok(message) => println!("{message}"),
        Err(err) => println!("Before install: {err}"),
    }

    greeter.set_behavior(FnStrategy::new("b", |()| "run strategy algo B"));
    println!("{}", greeter.execute().unwrap());
    greeter.set_behavior(FnStrategy::new("a", |()| "run strategy algo A"));
    println!("{}", greeter.execute().unwrap());

    println!("\nSelecting by name:");
    let mut sorter: StrategyRegistry<Vec<i32>, Vec<i32>> = StrategyRegistry::new();
    sorter.register(Ascending);
    sorter.register(FnStrategy::new("descending", |mut v: Vec<i32>| {
        v.sort_unstable_by(|a, b| b.cmp(a));
        v
    }));
    println!("Registered: {:?}", sorter.registered());

    for name in ["ascending", "descending", "shuffled"] {
        match sorter.select(name) {
            Ok(_) => println!("  {name}: {:?}", sorter.run(vec![3, 1, 2]).unwrap()),
            Err(err) => println!("  {name}: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
