//! Property-based tests for strategies, machines and visitors.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use switchyard::core::{Closed, Event, State};
use switchyard::elevator::{elevator, elevator_table, Button, Floor};
use switchyard::machine::{Outcome, StateMachine};
use switchyard::strategy::{FnStrategy, StrategyRegistry};
use switchyard::visitor::accept_all;

pub struct Alpha(u8);
pub struct Beta(u8);

switchyard::element_set! {
    pub enum Pair: PairVisitor {
        Alpha(Alpha) => visit_alpha,
        Beta(Beta) => visit_beta,
    }
}

#[derive(Default)]
struct Recorder {
    alpha: Vec<u8>,
    beta: Vec<u8>,
}

impl PairVisitor for Recorder {
    type Output = char;

    fn visit_alpha(&mut self, element: &Alpha) -> char {
        self.alpha.push(element.0);
        'a'
    }

    fn visit_beta(&mut self, element: &Beta) -> char {
        self.beta.push(element.0);
        'b'
    }
}

prop_compose! {
    fn arbitrary_floor()(variant in 0..3u8) -> Floor {
        match variant {
            0 => Floor::Ground,
            1 => Floor::Middle,
            _ => Floor::Top,
        }
    }
}

prop_compose! {
    fn arbitrary_button()(up in any::<bool>()) -> Button {
        if up { Button::Up } else { Button::Down }
    }
}

prop_compose! {
    fn arbitrary_pair()(is_alpha in any::<bool>(), value in any::<u8>()) -> (bool, u8) {
        (is_alpha, value)
    }
}

fn level(floor: Floor) -> i8 {
    match floor {
        Floor::Ground => 0,
        Floor::Middle => 1,
        Floor::Top => 2,
    }
}

proptest! {
    #[test]
    fn strategy_last_write_wins(labels in prop::collection::vec(0..16u32, 1..20)) {
        let mut registry = StrategyRegistry::new();

        for label in &labels {
            let label = *label;
            registry.set_behavior(FnStrategy::new(format!("s{label}"), move |()| label));
            prop_assert_eq!(registry.execute(), Ok(label));
        }

        let last = *labels.last().unwrap();
        let expected_name = format!("s{last}");
        prop_assert_eq!(registry.active_name(), Some(expected_name.as_str()));
    }

    #[test]
    fn setting_same_strategy_twice_matches_once(value in any::<i32>()) {
        let strategy = std::sync::Arc::new(FnStrategy::new("fixed", move |()| value));

        let mut once = StrategyRegistry::new();
        once.set_shared(strategy.clone());

        let mut twice = StrategyRegistry::new();
        twice.set_shared(strategy.clone());
        twice.set_shared(strategy);

        prop_assert_eq!(once.execute(), twice.execute());
    }

    #[test]
    fn elevator_matches_floor_model(buttons in prop::collection::vec(arbitrary_button(), 0..40)) {
        let mut machine = elevator();
        let mut expected: i8 = 0;

        for button in buttons {
            let outcome = machine.fire(button);
            let target = expected + if button == Button::Up { 1 } else { -1 };

            if (0..=2).contains(&target) {
                prop_assert!(outcome.is_moved());
                expected = target;
            } else {
                prop_assert!(outcome.is_rejected());
            }
            prop_assert_eq!(level(*machine.current_state()), expected);
        }
    }

    #[test]
    fn owner_tracks_machine_and_move_count(
        start in arbitrary_floor(),
        buttons in prop::collection::vec(arbitrary_button(), 0..40)
    ) {
        let mut machine = StateMachine::new(start);
        let mut moves = 0u64;

        for button in buttons {
            if machine.fire(button).is_moved() {
                moves += 1;
            }
            let owner = machine.active().owner();
            prop_assert_eq!(owner.machine(), machine.id());
            prop_assert_eq!(owner.generation(), moves);
        }
    }

    #[test]
    fn retired_owner_is_always_refused(
        buttons in prop::collection::vec(arbitrary_button(), 1..20)
    ) {
        let mut machine = elevator();
        let mut retired = Vec::new();

        for button in buttons {
            let before = machine.owner();
            if machine.fire(button).is_moved() {
                retired.push(before);
            }
        }

        let state = *machine.current_state();
        for owner in retired {
            prop_assert!(machine.fire_as(owner, Button::Up).is_err());
            prop_assert_eq!(*machine.current_state(), state);
        }
    }

    #[test]
    fn rejection_never_changes_state(start in arbitrary_floor(), button in arbitrary_button()) {
        let mut machine = StateMachine::new(start);
        let owner = machine.owner();

        if machine.fire(button).is_rejected() {
            prop_assert_eq!(*machine.current_state(), start);
            prop_assert_eq!(machine.owner(), owner);
        }
    }

    #[test]
    fn table_and_intrinsic_machines_agree(
        start in arbitrary_floor(),
        buttons in prop::collection::vec(arbitrary_button(), 0..30)
    ) {
        let mut intrinsic = StateMachine::new(start);
        let mut table = StateMachine::with_transitions(start, elevator_table().unwrap());

        for button in buttons {
            prop_assert_eq!(intrinsic.fire(button), table.fire(button));
        }
    }

    #[test]
    fn event_names_round_trip(button in arbitrary_button()) {
        prop_assert_eq!(Button::parse(button.name()), Some(button));
    }

    #[test]
    fn handle_event_ignores_unknown_names(name in "[a-z]{1,8}") {
        prop_assume!(Button::parse(&name).is_none());
        let mut machine = elevator();

        prop_assert!(machine.handle_event(&name).is_err());
        prop_assert_eq!(machine.current_state(), &Floor::Ground);
    }

    #[test]
    fn visitor_calls_only_matching_operation(
        items in prop::collection::vec(arbitrary_pair(), 0..30)
    ) {
        let elements: Vec<Pair> = items
            .iter()
            .map(|&(is_alpha, value)| {
                if is_alpha {
                    Pair::Alpha(Alpha(value))
                } else {
                    Pair::Beta(Beta(value))
                }
            })
            .collect();
        let mut recorder = Recorder::default();

        let outputs = accept_all(&elements, &mut recorder);

        let expected_outputs: Vec<char> = items
            .iter()
            .map(|&(a, _)| if a { 'a' } else { 'b' })
            .collect();
        let expected_alpha: Vec<u8> = items.iter().filter(|(a, _)| *a).map(|&(_, v)| v).collect();
        let expected_beta: Vec<u8> = items.iter().filter(|(a, _)| !*a).map(|&(_, v)| v).collect();

        prop_assert_eq!(outputs, expected_outputs);
        prop_assert_eq!(recorder.alpha, expected_alpha);
        prop_assert_eq!(recorder.beta, expected_beta);
    }

    #[test]
    fn outcome_roundtrip_serialization(start in arbitrary_floor(), button in arbitrary_button()) {
        let outcome: Outcome<Floor> = StateMachine::new(start).fire(button);
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<Floor> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(outcome, deserialized);
    }

    #[test]
    fn state_name_is_stable(floor in arbitrary_floor()) {
        prop_assert_eq!(floor.name(), floor.name());
        prop_assert!(Floor::VARIANTS.contains(&floor));
    }
}
