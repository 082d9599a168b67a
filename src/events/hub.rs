//! In-process notification hub.
//!
//! The hub is a topic-keyed subscriber registry. Publication is synchronous:
//! every matching handler runs to completion, in subscription order, before
//! `publish` returns. The hub is owned by the machine but usable on its own,
//! so tests and callers can drive it directly.

use super::transition::TransitionEvent;
use crate::core::State;
use std::fmt;

/// Handler invoked on publication.
///
/// The payload is `None` for conditional events, which carry no payload.
pub type Handler<S> = Box<dyn FnMut(Option<&TransitionEvent<S>>)>;

/// Token identifying a single subscriber, returned by
/// [`Hub::subscribe`] and consumed by [`Hub::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

struct Subscriber<S: State> {
    id: u64,
    topic: String,
    handler: Handler<S>,
}

/// Topic-keyed subscriber registry.
///
/// # Example
///
/// ```rust
/// use switchback::{Hub, TransitionEvent};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut hub: Hub<&'static str> = Hub::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&seen);
/// hub.subscribe("transition", move |_event| {
///     counter.set(counter.get() + 1);
/// });
///
/// let event = TransitionEvent { from: "a", to: "b", args: None, back: false };
/// hub.publish("transition", Some(&event));
/// assert_eq!(seen.get(), 1);
/// ```
pub struct Hub<S: State> {
    subscribers: Vec<Subscriber<S>>,
    next_id: u64,
}

impl<S: State> Default for Hub<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Hub<S> {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a handler for `topic`.
    ///
    /// Handlers for the same topic are invoked in subscription order.
    pub fn subscribe<F>(&mut self, topic: impl Into<String>, handler: F) -> Subscription
    where
        F: FnMut(Option<&TransitionEvent<S>>) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            topic: topic.into(),
            handler: Box::new(handler),
        });
        Subscription { id }
    }

    /// Remove the subscriber identified by `subscription`.
    ///
    /// Unknown tokens (already removed, or cleared by
    /// [`unsubscribe_all`](Self::unsubscribe_all)) are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|s| s.id != subscription.id);
    }

    /// Remove every subscriber on every topic.
    pub fn unsubscribe_all(&mut self) {
        self.subscribers.clear();
    }

    /// Number of subscribers currently registered for `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.subscribers.iter().filter(|s| s.topic == topic).count()
    }

    /// Deliver `event` to every subscriber of `topic`, in subscription
    /// order, synchronously.
    pub fn publish(&mut self, topic: &str, event: Option<&TransitionEvent<S>>) {
        tracing::trace!(topic, "publish");
        for subscriber in self.subscribers.iter_mut().filter(|s| s.topic == topic) {
            (subscriber.handler)(event);
        }
    }
}

impl<S: State> fmt::Debug for Hub<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
