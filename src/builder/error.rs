//! Build errors for state machine construction.

use thiserror::Error;

/// Errors that can occur when constructing a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No states declared and no default state provided. Call .states(..) or .default_state(..)")]
    NoStates,
}
