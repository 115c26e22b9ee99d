//! Component Visitor
//!
//! This demo declares a closed set of components and runs two visitors
//! over it: one that renders each component and one that accumulates a
//! total.
//!
//! Key concepts:
//! - The element picks the visitor operation from its own variant
//! - Every visitor must handle every variant, checked at compile time
//! - Visitors may carry state across visits
//!
//! Run with: RUST_LOG=trace cargo run --example component_visitor

use switchyard::element_set;
use switchyard::visitor::{accept, accept_all, Element};
use tracing_subscriber::EnvFilter;

pub struct ComponentA {
    pub label: String,
}

pub struct ComponentB {
    pub weight: u32,
}

element_set! {
    /// Components that visitors walk over.
    pub enum Component: ComponentVisitor {
        A(ComponentA) => visit_a,
        B(ComponentB) => visit_b,
    }
}

struct Render;

impl ComponentVisitor for Render {
    type Output = String;

    fn visit_a(&mut self, element: &ComponentA) -> String {
        format!("A exclusive method: {}", element.label)
    }

    fn visit_b(&mut self, element: &ComponentB) -> String {
        format!("B exclusive method: weight {}", element.weight)
    }
}

#[derive(Default)]
struct Total {
    labels: usize,
    weight: u32,
}

impl ComponentVisitor for Total {
    type Output = ();

    fn visit_a(&mut self, _element: &ComponentA) {
        self.labels += 1;
    }

    fn visit_b(&mut self, element: &ComponentB) {
        self.weight += element.weight;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Component Visitor Example ===\n");

    let components = vec![
        Component::A(ComponentA { label: "first".into() }),
        Component::B(ComponentB { weight: 7 }),
        Component::A(ComponentA { label: "second".into() }),
        Component::B(ComponentB { weight: 5 }),
    ];

    for component in &components {
        println!("  [{}] {}", component.kind(), accept(component, &mut Render));
    }

    let mut total = Total::default();
    accept_all(&components, &mut total);
    println!("\n{} labelled components, total weight {}", total.labels, total.weight);

    println!("\n=== Example Complete ===");
}
