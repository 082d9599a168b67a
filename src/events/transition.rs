//! Notification payloads and conditional-event bindings.

use crate::core::State;
use serde::Serialize;
use serde_json::Value;

/// Payload published on every successful transition.
///
/// The same payload is delivered to the `transition`, `leave:<from>`, and
/// `enter:<to>` topics. `back` is true when the transition was produced by
/// [`StateMachine::back`](crate::StateMachine::back).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct TransitionEvent<S: State> {
    /// The state that was left.
    pub from: S,
    /// The state that was entered.
    pub to: S,
    /// The argument sequence attached to the transition, if any.
    pub args: Option<Vec<Value>>,
    /// Whether this transition reverted to a previously visited state.
    pub back: bool,
}

/// A conditional-event binding.
///
/// When a transition exactly matching `from -> to` fires, `event` is
/// published with no payload. Bindings are appended via
/// [`StateMachine::register`](crate::StateMachine::register); duplicates
/// are retained and all matching bindings fire, in registration order.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct EventBinding<S: State> {
    /// The topic published when the binding matches.
    pub event: String,
    /// Required source state.
    pub from: S,
    /// Required target state.
    pub to: S,
}

impl<S: State> EventBinding<S> {
    /// Check whether this binding matches the given transition. Pure.
    pub fn matches(&self, event: &TransitionEvent<S>) -> bool {
        self.from == event.from && self.to == event.to
    }
}

/// Well-known notification topics.
pub mod topic {
    use crate::core::State;

    /// Published on every successful transition, before the per-state topics.
    pub const TRANSITION: &str = "transition";

    /// Topic published when `state` is entered.
    pub fn enter<S: State>(state: &S) -> String {
        format!("enter:{}", state.name())
    }

    /// Topic published when `state` is left.
    pub fn leave<S: State>(state: &S) -> String {
        format!("leave:{}", state.name())
    }
}
