//! Core state machine types.
//!
//! This module contains the pure pieces of the machine:
//! - State identifiers via the `State` trait
//! - Allow/deny transition rules
//! - The transition history stack
//!
//! Nothing in this module performs side effects; validation and history
//! inspection are pure given the same inputs.

mod history;
mod rules;
mod state;

pub use history::{History, HistoryEntry};
pub use rules::{RuleSet, TransitionRules};
pub use state::State;
