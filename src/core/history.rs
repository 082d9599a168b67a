//! Transition history tracking.
//!
//! The history is an ordered stack of snapshots of previously-current
//! states and their argument sequences, enabling the machine's `back`
//! operation. Only the machine itself pushes and pops entries.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Snapshot of a previously-current state.
///
/// `state` is the state that was left, and `args` the argument sequence
/// that was active immediately before the transition that left it.
/// `args` is `None` when no arguments were attached, which is distinct
/// from an attached-but-empty sequence.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: State> {
    /// The state being left.
    pub state: S,
    /// The argument sequence active before the transition, if any.
    pub args: Option<Vec<Value>>,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered stack of history entries.
///
/// Grows by one on every successful forward transition and shrinks by one
/// on every successful `back`. Never mutated on a failed operation.
///
/// # Example
///
/// ```rust
/// use switchback::StateMachine;
///
/// let mut machine = StateMachine::builder()
///     .states(["a", "b", "c"])
///     .build()
///     .unwrap();
///
/// machine.set_state("b");
/// machine.set_state("c");
///
/// assert_eq!(machine.history().len(), 2);
/// assert_eq!(machine.history().path(), vec![&"a", &"b"]);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct History<S: State> {
    entries: Vec<HistoryEntry<S>>,
}

impl<S: State> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> History<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry<S>) {
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<HistoryEntry<S>> {
        self.entries.pop()
    }

    /// The most recently pushed entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry<S>> {
        self.entries.last()
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no transitions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }

    /// The states traversed, oldest first.
    pub fn path(&self) -> Vec<&S> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(state: &'static str, args: Option<Vec<Value>>) -> HistoryEntry<&'static str> {
        HistoryEntry {
            state,
            args,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: History<&'static str> = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
        assert!(history.path().is_empty());
    }

    #[test]
    fn push_and_pop_are_lifo() {
        let mut history = History::new();
        history.push(entry("a", None));
        history.push(entry("b", Some(vec![json!(1)])));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().state, "b");

        let popped = history.pop().unwrap();
        assert_eq!(popped.state, "b");
        assert_eq!(popped.args, Some(vec![json!(1)]));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn path_lists_states_oldest_first() {
        let mut history = History::new();
        history.push(entry("a", None));
        history.push(entry("b", None));
        history.push(entry("c", None));

        assert_eq!(history.path(), vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn absent_args_are_distinct_from_empty_args() {
        let mut history = History::new();
        history.push(entry("a", None));
        history.push(entry("b", Some(vec![])));

        let with_empty = history.pop().unwrap();
        assert_eq!(with_empty.args, Some(vec![]));
        let without = history.pop().unwrap();
        assert_eq!(without.args, None);
    }

    #[test]
    fn history_serializes_for_diagnostics() {
        let mut history = History::new();
        history.push(entry("a", Some(vec![json!("x")])));

        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(value["entries"][0]["state"], json!("a"));
        assert_eq!(value["entries"][0]["args"], json!(["x"]));
    }
}
