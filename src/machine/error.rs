//! Transition errors.

use thiserror::Error;

/// Reasons a transition (forward or back) can be refused.
///
/// The boolean-returning operations collapse all of these to `false`;
/// the `try_` variants surface them for callers that care.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("machine is locked")]
    Locked,

    #[error("already in state '{state}'")]
    SelfTransition { state: String },

    #[error("'{state}' is not a declared state")]
    UnknownState { state: String },

    #[error("transition rules refuse '{from}' -> '{to}'")]
    RuleBlocked { from: String, to: String },

    #[error("history is empty, nothing to go back to")]
    EmptyHistory,
}
