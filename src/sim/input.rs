//! Gesture input subscription
//!
//! Gestures are delivered on the same thread as the frame loop, between two
//! `update` calls. Agents subscribe a handler and fold whatever arrives into
//! their own accumulators.

use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};

/// Discrete gesture kinds recognised by the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    Tap,
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
}

/// Handle returned by `subscribe`, needed to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback receiving a gesture and the screen position it happened at
pub type GestureHandler = Box<dyn FnMut(Gesture, f32, f32)>;

/// Something agents can subscribe to for gestures
pub trait GestureSource {
    fn subscribe(&self, handler: GestureHandler) -> SubscriptionId;

    /// Remove a handler. Unknown or already-removed ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Same-thread gesture dispatcher
///
/// Handlers run in subscription order. A handler may subscribe or
/// unsubscribe (itself included) while a gesture is being dispatched.
#[derive(Default)]
pub struct GestureBus {
    handlers: RefCell<Vec<(SubscriptionId, GestureHandler)>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
    /// Ids removed while their handler list was checked out for dispatch
    cancelled: RefCell<Vec<SubscriptionId>>,
}

impl GestureBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver one gesture to every live handler
    pub fn dispatch(&self, gesture: Gesture, x: f32, y: f32) {
        if self.dispatching.get() {
            log::warn!("Nested gesture dispatch of {:?} dropped", gesture);
            return;
        }
        self.dispatching.set(true);

        let mut handlers = std::mem::take(&mut *self.handlers.borrow_mut());
        for (id, handler) in handlers.iter_mut() {
            if self.cancelled.borrow().contains(id) {
                continue;
            }
            handler(gesture, x, y);
        }

        let cancelled = std::mem::take(&mut *self.cancelled.borrow_mut());
        handlers.retain(|(id, _)| !cancelled.contains(id));

        // Anything subscribed during dispatch goes after the existing handlers
        let mut handlers_ref = self.handlers.borrow_mut();
        handlers.append(&mut handlers_ref);
        *handlers_ref = handlers;

        self.dispatching.set(false);
    }
}

impl GestureSource for GestureBus {
    fn subscribe(&self, handler: GestureHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        if handlers.len() == before && self.dispatching.get() {
            self.cancelled.borrow_mut().push(id);
        }
    }
}
