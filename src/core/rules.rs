//! Per-state transition rules.
//!
//! Rules are pure allow/deny lists consulted during transition validation.
//! Each state may constrain the transitions leaving it (`to`) and the
//! transitions entering it (`from`) independently.

use super::state::State;
use serde::Serialize;

/// A single rule set: unconstrained, an allow-list, or a deny-list.
///
/// When both lists are somehow present, `only` wins and `exclude` is
/// ignored entirely.
///
/// # Example
///
/// ```rust
/// use switchback::RuleSet;
///
/// let only_c = RuleSet::only(["c"]);
/// assert!(only_c.permits(&"c"));
/// assert!(!only_c.permits(&"b"));
///
/// let not_a = RuleSet::exclude(["a"]);
/// assert!(!not_a.permits(&"a"));
/// assert!(not_a.permits(&"b"));
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct RuleSet<S: State> {
    /// Allow-list: when present, only these states pass.
    pub only: Option<Vec<S>>,
    /// Deny-list: when present (and no allow-list), these states fail.
    pub exclude: Option<Vec<S>>,
}

impl<S: State> Default for RuleSet<S> {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl<S: State> RuleSet<S> {
    /// A rule set that permits everything.
    pub fn unconstrained() -> Self {
        Self {
            only: None,
            exclude: None,
        }
    }

    /// An allow-list: only the given states pass.
    pub fn only(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            only: Some(states.into_iter().collect()),
            exclude: None,
        }
    }

    /// A deny-list: everything passes except the given states.
    pub fn exclude(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            only: None,
            exclude: Some(states.into_iter().collect()),
        }
    }

    /// Check whether `state` passes this rule set. Pure.
    pub fn permits(&self, state: &S) -> bool {
        if let Some(only) = &self.only {
            return only.contains(state);
        }
        if let Some(exclude) = &self.exclude {
            return !exclude.contains(state);
        }
        true
    }
}

/// Transition rules for one state: constraints on transitions leaving it
/// and on transitions entering it.
///
/// Registered (and entirely replaced, never merged) via
/// [`StateMachine::config`](crate::StateMachine::config). Missing rule sets
/// default to unconstrained.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct TransitionRules<S: State> {
    /// Constraints on transitions leaving this state.
    pub to: RuleSet<S>,
    /// Constraints on transitions entering this state.
    pub from: RuleSet<S>,
}

impl<S: State> Default for TransitionRules<S> {
    fn default() -> Self {
        Self {
            to: RuleSet::unconstrained(),
            from: RuleSet::unconstrained(),
        }
    }
}

impl<S: State> TransitionRules<S> {
    /// Only the given states may be entered from this state.
    pub fn to_only(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            to: RuleSet::only(states),
            from: RuleSet::unconstrained(),
        }
    }

    /// The given states may not be entered from this state.
    pub fn to_exclude(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            to: RuleSet::exclude(states),
            from: RuleSet::unconstrained(),
        }
    }

    /// Only the given states may enter this state.
    pub fn from_only(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            to: RuleSet::unconstrained(),
            from: RuleSet::only(states),
        }
    }

    /// The given states may not enter this state.
    pub fn from_exclude(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            to: RuleSet::unconstrained(),
            from: RuleSet::exclude(states),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_permits_everything() {
        let rules: RuleSet<&'static str> = RuleSet::unconstrained();
        assert!(rules.permits(&"a"));
        assert!(rules.permits(&"b"));
    }

    #[test]
    fn only_permits_listed_states() {
        let rules = RuleSet::only(["b", "c"]);
        assert!(rules.permits(&"b"));
        assert!(rules.permits(&"c"));
        assert!(!rules.permits(&"a"));
    }

    #[test]
    fn exclude_rejects_listed_states() {
        let rules = RuleSet::exclude(["a"]);
        assert!(!rules.permits(&"a"));
        assert!(rules.permits(&"b"));
    }

    #[test]
    fn only_takes_precedence_over_exclude() {
        // A state listed in both: the allow-list is consulted, the
        // deny-list is ignored.
        let rules = RuleSet {
            only: Some(vec!["b"]),
            exclude: Some(vec!["b"]),
        };
        assert!(rules.permits(&"b"));
        assert!(!rules.permits(&"c"));
    }

    #[test]
    fn empty_only_permits_nothing() {
        let rules: RuleSet<&'static str> = RuleSet::only([]);
        assert!(!rules.permits(&"a"));
    }

    #[test]
    fn default_rules_are_unconstrained() {
        let rules: TransitionRules<&'static str> = TransitionRules::default();
        assert!(rules.to.permits(&"x"));
        assert!(rules.from.permits(&"y"));
    }

    #[test]
    fn convenience_constructors_touch_one_side_only() {
        let rules = TransitionRules::to_only(["c"]);
        assert!(rules.to.permits(&"c"));
        assert!(!rules.to.permits(&"b"));
        assert!(rules.from.permits(&"b"));

        let rules = TransitionRules::from_exclude(["a"]);
        assert!(!rules.from.permits(&"a"));
        assert!(rules.to.permits(&"a"));
    }
}
