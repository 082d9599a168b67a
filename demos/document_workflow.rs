//! Document Workflow
//!
//! A draft/review/published flow demonstrating transition arguments,
//! conditional events, locking, and back-navigation.
//!
//! Run with: cargo run --example document_workflow

use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use switchback::{StateMachine, TransitionRules};

fn main() {
    tracing_subscriber::fmt::init();

    let mut machine = StateMachine::builder()
        .states(["draft", "review", "published"])
        .rules("published", TransitionRules::from_only(["review"]))
        .bind("went-live", "review", "published")
        .build()
        .expect("states were declared");

    let audit = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&audit);
    machine.subscribe("transition", move |event| {
        if let Some(event) = event {
            log.borrow_mut()
                .push(format!("{} -> {}", event.from, event.to));
        }
    });
    let log = Rc::clone(&audit);
    machine.subscribe("went-live", move |_| {
        log.borrow_mut().push("document is live".to_string());
    });

    // Drafts cannot be published directly.
    assert!(!machine.set_state("published"));

    assert!(machine.set_state_with("review", [json!({"reviewer": "sam"})]));
    assert!(machine.set_state("published"));

    // Freeze the workflow: nothing moves while locked.
    machine.lock();
    assert!(!machine.back());
    machine.unlock();

    // Pull the document back into review.
    assert!(machine.back());
    println!("current: {}", machine.current_state());
    println!("reviewer args: {:?}", machine.current_args());

    for line in audit.borrow().iter() {
        println!("audit: {line}");
    }
}
