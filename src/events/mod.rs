//! Notification hub and event types.
//!
//! The machine publishes to an owned [`Hub`] rather than inheriting
//! emitter behavior: the hub is a plain subscriber registry that the
//! machine (or anything else) pushes events into. On every successful
//! transition the machine publishes, in order:
//!
//! 1. [`topic::TRANSITION`] with a [`TransitionEvent`] payload
//! 2. `leave:<from>` with the same payload
//! 3. `enter:<to>` with the same payload
//! 4. every matching [`EventBinding`]'s event, with no payload
//!
//! Handlers run synchronously and in subscription order; publication is
//! the last step of a transition, after all machine state has been
//! updated.

mod hub;
mod transition;

pub use hub::{Handler, Hub, Subscription};
pub use transition::{topic, EventBinding, TransitionEvent};
