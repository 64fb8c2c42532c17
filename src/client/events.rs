//! Synchronous UI event bus
//!
//! Handlers run on the publishing thread in subscription order, and each
//! event is fully handled before `publish` returns.

use std::fmt;
use std::time::Instant;

/// Which filter row a click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    Skills,
    Projects,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ThemeToggleClicked,
    MenuButtonClicked,
    MenuCloseClicked,
    MenuLinkClicked,
    KeyDown(String),
    FilterClicked { target: FilterTarget, filter: String },
    FaqClicked(usize),
    /// Visible ratio of an animated card
    CardVisibility { index: usize, ratio: f64 },
    /// Pointer entered (`true`) or left a card
    CardHover { index: usize, entered: bool },
    /// Visible ratio of a progress bar
    ProgressVisibility { index: usize, ratio: f64 },
    Scrolled(f64),
    AnchorClicked(String),
    Resized(Instant),
    /// Timer tick used to flush debounced work
    Tick(Instant),
    NotificationClosed(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(&E) + Send>;

pub struct EventBus<E> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<E>)>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Deliver to every subscriber; returns how many were called
    pub fn publish(&mut self, event: &E) -> usize {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
        self.handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_publish_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = Arc::clone(&log);
        bus.subscribe(move |e: &u32| first.lock().unwrap().push(format!("a{e}")));
        let second = Arc::clone(&log);
        bus.subscribe(move |e: &u32| second.lock().unwrap().push(format!("b{e}")));

        assert_eq!(bus.publish(&1), 2);
        bus.publish(&2);
        assert_eq!(*log.lock().unwrap(), ["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();
        let counter = Arc::clone(&hits);
        let id = bus.subscribe(move |_: &UiEvent| *counter.lock().unwrap() += 1);

        bus.publish(&UiEvent::ThemeToggleClicked);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.publish(&UiEvent::ThemeToggleClicked), 0);
        assert_eq!(*hits.lock().unwrap(), 1);
    }
}
