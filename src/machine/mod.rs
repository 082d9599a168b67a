//! The state machine itself.
//!
//! `StateMachine` is the imperative shell around the pure core types: it
//! owns the current state, the fixed state set, the lock flag, the history
//! stack, per-state transition rules, conditional-event bindings, and the
//! notification hub.

mod error;

pub use error::TransitionError;

use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::{History, HistoryEntry, State, TransitionRules};
use crate::events::{topic, EventBinding, Hub, Subscription, TransitionEvent};
use chrono::Utc;
use serde_json::Value;

/// Construction options for a [`StateMachine`].
///
/// `default_state` falls back to the first entry of `states`. For state
/// types with a `Default` impl, `MachineConfig::default()` yields a
/// single-element sentinel state set.
#[derive(Clone, Debug)]
pub struct MachineConfig<S: State> {
    /// The fixed, ordered state set. Uniqueness is not enforced and is
    /// assumed by the caller.
    pub states: Vec<S>,
    /// Starting state. Defaults to the first entry of `states`.
    pub default_state: Option<S>,
}

impl<S: State + Default> Default for MachineConfig<S> {
    fn default() -> Self {
        Self {
            states: vec![S::default()],
            default_state: None,
        }
    }
}

/// A minimal state machine with transition history and notifications.
///
/// Transitions are validated against the fixed state set, per-state
/// allow/deny rules, and the lock flag. Every successful transition is
/// recorded on a history stack ([`back`](Self::back) reverts it) and
/// published to the owned notification [`Hub`].
///
/// All operations are synchronous; fallible ones signal failure through
/// their return value and leave the machine untouched on failure.
///
/// # Example
///
/// ```rust
/// use switchback::{StateMachine, TransitionRules};
///
/// let mut machine = StateMachine::builder()
///     .states(["draft", "review", "published"])
///     .build()
///     .unwrap();
///
/// // Out of review, only publishing is allowed.
/// machine.config("review", TransitionRules::to_only(["published"]));
///
/// assert!(machine.set_state("review"));
/// assert!(!machine.set_state("draft")); // blocked by the rule
/// assert!(machine.set_state("published"));
///
/// assert!(machine.back());
/// assert_eq!(*machine.current_state(), "review");
/// ```
pub struct StateMachine<S: State> {
    states: Vec<S>,
    current: S,
    current_args: Option<Vec<Value>>,
    locked: bool,
    history: History<S>,
    rules: Vec<(S, TransitionRules<S>)>,
    bindings: Vec<EventBinding<S>>,
    hub: Hub<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine from explicit construction options.
    ///
    /// The starting state resolves to `config.default_state`, else the
    /// first entry of `config.states`. Only when neither exists does
    /// construction fail. A `default_state` that is not a member of
    /// `states` is accepted silently; the machine starts outside its
    /// declared state set and every forward transition out of it is
    /// still validated as usual.
    pub fn new(config: MachineConfig<S>) -> Result<Self, BuildError> {
        let current = config
            .default_state
            .or_else(|| config.states.first().cloned())
            .ok_or(BuildError::NoStates)?;

        Ok(Self {
            states: config.states,
            current,
            current_args: None,
            locked: false,
            history: History::new(),
            rules: Vec::new(),
            bindings: Vec::new(),
            hub: Hub::new(),
        })
    }

    /// Fluent construction. See [`StateMachineBuilder`].
    pub fn builder() -> StateMachineBuilder<S> {
        StateMachineBuilder::new()
    }

    /// The declared state set.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The argument sequence attached to the most recent transition.
    ///
    /// `None` when the last transition carried no arguments (distinct
    /// from an empty sequence).
    pub fn current_args(&self) -> Option<&[Value]> {
        self.current_args.as_deref()
    }

    /// The transition history stack.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Whether the machine is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Attempt to transition to `to` with no arguments attached.
    ///
    /// Returns `false` (leaving the machine untouched, publishing
    /// nothing) when the transition is invalid.
    pub fn set_state(&mut self, to: S) -> bool {
        self.try_set_state(to).is_ok()
    }

    /// Attempt to transition to `to`, attaching an argument sequence.
    ///
    /// An empty iterator attaches an empty sequence, which is observable
    /// as `Some(&[])` rather than `None`.
    pub fn set_state_with(&mut self, to: S, args: impl IntoIterator<Item = Value>) -> bool {
        self.try_set_state_with(to, args).is_ok()
    }

    /// Like [`set_state`](Self::set_state), but reports why a transition
    /// was refused.
    pub fn try_set_state(&mut self, to: S) -> Result<(), TransitionError> {
        self.transition(to, None)
    }

    /// Like [`set_state_with`](Self::set_state_with), but reports why a
    /// transition was refused.
    pub fn try_set_state_with(
        &mut self,
        to: S,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<(), TransitionError> {
        self.transition(to, Some(args.into_iter().collect()))
    }

    /// Attempt to revert to the most recently visited state.
    ///
    /// The reverse transition is validated against the current rules and
    /// lock flag, so a state reachable going forward may be unreachable
    /// going backward. Returns `false` on empty history or when blocked;
    /// the history is left untouched in either case.
    pub fn back(&mut self) -> bool {
        self.try_back().is_ok()
    }

    /// Like [`back`](Self::back), but reports why the revert was refused.
    pub fn try_back(&mut self) -> Result<(), TransitionError> {
        let to = match self.history.last() {
            Some(entry) => entry.state.clone(),
            None => return Err(TransitionError::EmptyHistory),
        };
        let from = self.current.clone();
        self.validate(&from, &to)?;

        if let Some(entry) = self.history.pop() {
            self.current = entry.state;
            self.current_args = entry.args;
        }
        tracing::debug!(from = from.name(), to = self.current.name(), "back");

        self.publish_transition(TransitionEvent {
            from,
            to,
            args: self.current_args.clone(),
            back: true,
        });
        Ok(())
    }

    /// Prevent all transitions (forward and back) until
    /// [`unlock`](Self::unlock).
    pub fn lock(&mut self) {
        tracing::trace!("machine locked");
        self.locked = true;
    }

    /// Allow transitions again.
    pub fn unlock(&mut self) {
        tracing::trace!("machine unlocked");
        self.locked = false;
    }

    /// Register or entirely replace the transition rules for `state`.
    ///
    /// Calling again for the same state overwrites its prior rules; they
    /// are never merged.
    pub fn config(&mut self, state: S, rules: TransitionRules<S>) {
        if let Some(slot) = self.rules.iter_mut().find(|(s, _)| *s == state) {
            slot.1 = rules;
        } else {
            self.rules.push((state, rules));
        }
    }

    /// Append a conditional-event binding: publish `event` (no payload)
    /// whenever a transition exactly matching `from -> to` fires.
    ///
    /// Bindings sharing a name or a from/to pair are all retained and all
    /// matching ones fire, in registration order.
    pub fn register(&mut self, event: impl Into<String>, from: S, to: S) {
        self.bindings.push(EventBinding {
            event: event.into(),
            from,
            to,
        });
    }

    /// Subscribe a handler to a notification topic.
    ///
    /// Handlers run synchronously, in subscription order, after the
    /// machine has finished mutating its state. Conditional events are
    /// delivered with a `None` payload.
    pub fn subscribe<F>(&mut self, topic: impl Into<String>, handler: F) -> Subscription
    where
        F: FnMut(Option<&TransitionEvent<S>>) + 'static,
    {
        self.hub.subscribe(topic, handler)
    }

    /// Remove a single subscriber.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.hub.unsubscribe(subscription);
    }

    /// Remove every subscriber on every topic.
    pub fn unsubscribe_all(&mut self) {
        self.hub.unsubscribe_all();
    }

    /// Direct access to the notification hub.
    pub fn events(&mut self) -> &mut Hub<S> {
        &mut self.hub
    }

    /// Check whether a transition from the current state to `to` would be
    /// accepted. Pure; the machine is not touched.
    pub fn can_transition(&self, to: &S) -> bool {
        self.validate(&self.current, to).is_ok()
    }

    fn transition(&mut self, to: S, args: Option<Vec<Value>>) -> Result<(), TransitionError> {
        let from = self.current.clone();
        self.validate(&from, &to)?;

        self.history.push(HistoryEntry {
            state: from.clone(),
            args: self.current_args.take(),
            recorded_at: Utc::now(),
        });
        self.current_args = args;
        self.current = to.clone();
        tracing::debug!(from = from.name(), to = to.name(), "transition");

        self.publish_transition(TransitionEvent {
            from,
            to,
            args: self.current_args.clone(),
            back: false,
        });
        Ok(())
    }

    /// Pure validation predicate, checked in a fixed order: lock,
    /// self-transition, membership, outbound rules of `from`, inbound
    /// rules of `to`.
    fn validate(&self, from: &S, to: &S) -> Result<(), TransitionError> {
        if self.locked {
            return Err(TransitionError::Locked);
        }
        if from == to {
            return Err(TransitionError::SelfTransition {
                state: to.name().to_string(),
            });
        }
        if !self.states.contains(to) {
            return Err(TransitionError::UnknownState {
                state: to.name().to_string(),
            });
        }

        let blocked = TransitionError::RuleBlocked {
            from: from.name().to_string(),
            to: to.name().to_string(),
        };
        if let Some(rules) = self.rules_for(from) {
            if !rules.to.permits(to) {
                return Err(blocked);
            }
        }
        if let Some(rules) = self.rules_for(to) {
            if !rules.from.permits(from) {
                return Err(blocked);
            }
        }
        Ok(())
    }

    fn rules_for(&self, state: &S) -> Option<&TransitionRules<S>> {
        self.rules
            .iter()
            .find(|(s, _)| s == state)
            .map(|(_, rules)| rules)
    }

    /// Publish the per-transition topics, then any matching conditional
    /// events, all synchronously and in order.
    fn publish_transition(&mut self, event: TransitionEvent<S>) {
        self.hub.publish(topic::TRANSITION, Some(&event));
        self.hub.publish(&topic::leave(&event.from), Some(&event));
        self.hub.publish(&topic::enter(&event.to), Some(&event));

        for binding in &self.bindings {
            if binding.matches(&event) {
                self.hub.publish(&binding.event, None);
            }
        }
    }
}
