//! Traffic Light State Machine
//!
//! A cyclic machine where per-state allow-lists enforce the legal
//! sequence Red -> Green -> Yellow -> Red.
//!
//! Run with: cargo run --example traffic_light

use switchback::{state_enum, StateMachine, TransitionRules};

state_enum! {
    enum Light {
        Red,
        Yellow,
        Green,
    }
}

fn main() {
    let mut machine = StateMachine::builder()
        .states([Light::Red, Light::Yellow, Light::Green])
        .rules(Light::Red, TransitionRules::to_only([Light::Green]))
        .rules(Light::Green, TransitionRules::to_only([Light::Yellow]))
        .rules(Light::Yellow, TransitionRules::to_only([Light::Red]))
        .build()
        .expect("states were declared");

    println!("start: {:?}", machine.current_state());

    // Skipping yellow is refused by the allow-list.
    assert!(!machine.set_state(Light::Yellow));

    for _ in 0..2 {
        for next in [Light::Green, Light::Yellow, Light::Red] {
            assert!(machine.set_state(next));
            println!("now:   {:?}", machine.current_state());
        }
    }

    println!("visited {} states before now", machine.history().len());
}
