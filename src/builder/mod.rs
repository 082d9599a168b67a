//! Builder API for ergonomic state machine construction.
//!
//! The builder collects the state set, the starting state, and any
//! transition rules or conditional-event bindings that should be in place
//! before the first transition fires.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{State, TransitionRules};
use crate::machine::{MachineConfig, StateMachine};

/// Builder for [`StateMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchback::{StateMachine, TransitionRules};
///
/// let mut machine = StateMachine::builder()
///     .states(["idle", "running", "done"])
///     .default_state("idle")
///     .rules("running", TransitionRules::to_only(["done"]))
///     .bind("finished", "running", "done")
///     .build()
///     .unwrap();
///
/// assert!(machine.set_state("running"));
/// assert!(machine.set_state("done"));
/// ```
pub struct StateMachineBuilder<S: State> {
    states: Vec<S>,
    default_state: Option<S>,
    rules: Vec<(S, TransitionRules<S>)>,
    bindings: Vec<(String, S, S)>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            default_state: None,
            rules: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Append states to the declared state set.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Append a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Set the starting state. Defaults to the first declared state.
    ///
    /// Membership in the declared state set is not validated; an
    /// out-of-domain starting state is accepted silently.
    pub fn default_state(mut self, state: S) -> Self {
        self.default_state = Some(state);
        self
    }

    /// Pre-register transition rules for `state`, as
    /// [`StateMachine::config`] would.
    pub fn rules(mut self, state: S, rules: TransitionRules<S>) -> Self {
        self.rules.push((state, rules));
        self
    }

    /// Pre-register a conditional-event binding, as
    /// [`StateMachine::register`] would.
    pub fn bind(mut self, event: impl Into<String>, from: S, to: S) -> Self {
        self.bindings.push((event.into(), from, to));
        self
    }

    /// Build the machine.
    ///
    /// Fails only when no starting state can be resolved: no states were
    /// declared and no default state was given.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let mut machine = StateMachine::new(MachineConfig {
            states: self.states,
            default_state: self.default_state,
        })?;
        for (state, rules) in self.rules {
            machine.config(state, rules);
        }
        for (event, from, to) in self.bindings {
            machine.register(event, from, to);
        }
        Ok(machine)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
