//! Hardware back-button subscription
//!
//! Listeners are registered for the lifetime of a [`BackSubscription`];
//! dropping the guard unsubscribes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn() -> bool>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Platform-wide "back navigation requested" event source
#[derive(Clone, Default)]
pub struct BackHandler {
    registry: Rc<RefCell<Registry>>,
}

impl BackHandler {
    /// Create a handler with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it returns true when it consumed the event
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn add_listener(&self, listener: impl Fn() -> bool + 'static) -> BackSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));

        BackSubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Dispatch a back press, newest listener first
    ///
    /// Returns false when nobody consumed it and the event should propagate.
    pub fn press(&self) -> bool {
        // Snapshot so listeners may subscribe or unsubscribe while running
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .rev()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        let consumed = listeners.iter().any(|listener| listener());
        tracing::debug!(listeners = listeners.len(), consumed, "Back press dispatched");
        consumed
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard keeping a listener registered
pub struct BackSubscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl BackSubscription {
    /// Unsubscribe now
    pub fn remove(self) {}
}

impl Drop for BackSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
