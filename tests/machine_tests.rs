//! End-to-end tests for the machine surface: transitions, history,
//! rules, locking, and notifications working together.

use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use switchback::{state_enum, RuleSet, StateMachine, TransitionRules};

#[test]
fn worked_example_scenario() {
    // states a/b/c, default a
    let mut machine = StateMachine::builder()
        .states(["a", "b", "c"])
        .build()
        .unwrap();

    assert!(machine.set_state("b"));
    assert_eq!(*machine.current_state(), "b");
    assert_eq!(machine.history().len(), 1);
    assert_eq!(machine.history().last().unwrap().state, "a");
    assert_eq!(machine.history().last().unwrap().args, None);

    assert!(machine.set_state_with("c", [json!(1), json!(2), json!(3)]));
    assert_eq!(
        machine.current_args(),
        Some(&[json!(1), json!(2), json!(3)][..])
    );

    assert!(machine.back());
    assert_eq!(*machine.current_state(), "b");
    assert!(machine.current_args().is_none());
    assert_eq!(machine.history().len(), 1);
}

#[test]
fn forward_walk_then_full_rewind() {
    let mut machine = StateMachine::builder()
        .states(["a", "b", "c", "d"])
        .build()
        .unwrap();

    for target in ["b", "c", "d", "a", "c"] {
        assert!(machine.set_state(target));
    }
    assert_eq!(machine.history().len(), 5);
    assert_eq!(machine.history().path(), vec![&"a", &"b", &"c", &"d", &"a"]);
    assert_eq!(machine.history().entries()[0].state, "a");

    for expected in ["a", "d", "c", "b", "a"] {
        assert!(machine.back());
        assert_eq!(*machine.current_state(), expected);
    }
    assert!(machine.history().is_empty());
    assert!(machine.current_args().is_none());

    // Nothing left to revert.
    assert!(!machine.back());
}

#[test]
fn state_reachable_forward_may_be_unreachable_backward() {
    let mut machine = StateMachine::builder()
        .states(["a", "b"])
        .build()
        .unwrap();

    assert!(machine.set_state("b"));

    // Rules registered after the fact still govern the revert.
    machine.config("b", TransitionRules::to_only(["nowhere"]));

    assert!(!machine.back());
    assert_eq!(*machine.current_state(), "b");
    assert_eq!(machine.history().len(), 1);

    // Loosening the rule makes the same revert succeed.
    machine.config("b", TransitionRules::default());
    assert!(machine.back());
    assert_eq!(*machine.current_state(), "a");
}

#[test]
fn lock_freezes_a_configured_machine() {
    let mut machine = StateMachine::builder()
        .states(["a", "b", "c"])
        .rules("a", TransitionRules::to_only(["b"]))
        .build()
        .unwrap();

    machine.set_state("b");
    machine.lock();

    assert!(!machine.set_state("c"));
    assert!(!machine.back());
    assert_eq!(*machine.current_state(), "b");
    assert_eq!(machine.history().len(), 1);

    machine.unlock();
    assert!(machine.back());
}

#[test]
fn conditional_event_fires_exactly_once_per_matching_transition() {
    let mut machine = StateMachine::builder()
        .states(["a", "b", "c"])
        .build()
        .unwrap();

    machine.register("ev", "b", "c");

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    machine.subscribe("ev", move |payload| {
        assert!(payload.is_none());
        *sink.borrow_mut() += 1;
    });

    machine.set_state("b");
    assert_eq!(*count.borrow(), 0);
    machine.set_state("c");
    assert_eq!(*count.borrow(), 1);
    machine.set_state("a");
    machine.set_state("b");
    machine.set_state("c");
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn enter_and_leave_topics_follow_the_walk() {
    let mut machine = StateMachine::builder()
        .states(["a", "b", "c"])
        .build()
        .unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    for topic in ["enter:b", "leave:b", "enter:c"] {
        let sink = Rc::clone(&log);
        machine.subscribe(topic, move |_| sink.borrow_mut().push(topic));
    }

    machine.set_state("b");
    machine.set_state("c");
    machine.back(); // c -> b enters b again

    assert_eq!(
        *log.borrow(),
        vec!["enter:b", "leave:b", "enter:c", "enter:b"]
    );
}

#[test]
fn enum_states_drive_the_same_machinery() {
    state_enum! {
        enum Door {
            Open,
            Closed,
            Locked,
        }
    }

    let mut machine = StateMachine::builder()
        .states([Door::Open, Door::Closed, Door::Locked])
        .default_state(Door::Closed)
        .rules(
            Door::Locked,
            TransitionRules {
                to: RuleSet::only([Door::Closed]),
                from: RuleSet::only([Door::Closed]),
            },
        )
        .build()
        .unwrap();

    assert!(!machine.set_state(Door::Closed)); // self-transition
    assert!(machine.set_state(Door::Locked));
    assert!(!machine.set_state(Door::Open)); // locked door only opens via closed
    assert!(machine.back());
    assert_eq!(*machine.current_state(), Door::Closed);

    // Open -> Locked is blocked by the inbound allow-list.
    assert!(machine.set_state(Door::Open));
    assert!(!machine.set_state(Door::Locked));
}

#[test]
fn hub_is_reachable_as_a_sink() {
    let mut machine = StateMachine::builder()
        .states(["a", "b"])
        .build()
        .unwrap();

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    machine
        .events()
        .subscribe("transition", move |_| *sink.borrow_mut() += 1);

    machine.set_state("b");
    assert_eq!(machine.events().subscriber_count("transition"), 1);
    assert_eq!(*count.borrow(), 1);
}
