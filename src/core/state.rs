//! Core State trait for state machine states.
//!
//! States are opaque identifiers drawn from a fixed, caller-supplied set.
//! The machine never inspects a state beyond equality and its `name()`.

use serde::Serialize;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into history entries and events
/// - `PartialEq`: transition validation compares states by value
/// - `Debug`: diagnostics
/// - `Serialize`: events and history are serializable for logging
///
/// Implemented out of the box for `String` and `&'static str`, so
/// string-keyed machines need no boilerplate. For enum states, use the
/// [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use switchback::State;
/// use serde::Serialize;
///
/// #[derive(Clone, PartialEq, Debug, Serialize)]
/// enum Phase {
///     Draft,
///     Review,
///     Published,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Review => "Review",
///             Self::Published => "Published",
///         }
///     }
/// }
///
/// assert_eq!(Phase::Review.name(), "Review");
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize {
    /// Get the state's name, used for notification topics, log fields,
    /// and error messages.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, PartialEq, Debug, Serialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn string_states_name_themselves() {
        let owned = String::from("draft");
        assert_eq!(owned.name(), "draft");
        assert_eq!("review".name(), "review");
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Processing, TestState::Processing);
        assert_ne!(TestState::Processing, TestState::Complete);
    }

    #[test]
    fn state_serializes_for_diagnostics() {
        let json = serde_json::to_string(&TestState::Initial).unwrap();
        assert_eq!(json, "\"Initial\"");
    }
}
