//! Switchback: a minimal state machine with history and notifications.
//!
//! A machine tracks a current state out of a fixed set, validates and
//! performs transitions, records transition history (with a `back`
//! operation to revert), constrains legal transitions through per-state
//! allow/deny lists, and publishes notifications when transitions occur.
//!
//! # Core Concepts
//!
//! - **State**: an opaque identifier via the [`State`] trait (`String`,
//!   `&'static str`, or enums via [`state_enum!`])
//! - **Rules**: per-state `only`/`exclude` lists constraining which states
//!   may be entered from, or enter, a given state
//! - **History**: a stack of previously-current states and their
//!   arguments, driving [`StateMachine::back`]
//! - **Notifications**: a topic-keyed [`Hub`] publishing `transition`,
//!   `leave:<from>`, `enter:<to>`, and registered conditional events
//!
//! Fallible operations report failure through their return value and
//! leave the machine untouched; nothing panics in library code.
//!
//! # Example
//!
//! ```rust
//! use switchback::{StateMachine, TransitionRules};
//!
//! let mut machine = StateMachine::builder()
//!     .states(["a", "b", "c"])
//!     .build()
//!     .unwrap();
//!
//! // Out of 'a', only 'c' may be entered.
//! machine.config("a", TransitionRules::to_only(["c"]));
//!
//! assert!(!machine.set_state("b"));
//! assert!(machine.set_state("c"));
//! assert_eq!(machine.history().len(), 1);
//!
//! assert!(machine.back());
//! assert_eq!(*machine.current_state(), "a");
//! assert!(machine.history().is_empty());
//! ```

pub mod builder;
pub mod core;
pub mod events;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{History, HistoryEntry, RuleSet, State, TransitionRules};
pub use events::{topic, EventBinding, Hub, Subscription, TransitionEvent};
pub use machine::{MachineConfig, StateMachine, TransitionError};
