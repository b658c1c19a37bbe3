use std::sync::{Arc, Mutex, MutexGuard};

use crate::form::models::AppState;
use crate::form::reducer::{reduce, Event};
use crate::locations::LocationIndex;

pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    delivering: bool,
    undelivered: bool,
}

/// Holds the current [`AppState`] and notifies subscribers on change.
///
/// Listeners run after the lock is released, so a listener may read the
/// store (or dispatch) without deadlocking. Only one caller delivers at a
/// time: a commit made while another caller is notifying is picked up by
/// that caller's delivery loop, so renders follow commit order and the last
/// render is always the current state. Intermediate states may be skipped.
pub struct Store {
    inner: Mutex<Inner>,
    locations: Arc<LocationIndex>,
}

impl Store {
    pub fn new(locations: Arc<LocationIndex>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: AppState::default(),
                listeners: Vec::new(),
                next_id: 0,
                delivering: false,
                undelivered: false,
            }),
            locations,
        }
    }

    pub fn locations(&self) -> &LocationIndex {
        &self.locations
    }

    pub fn snapshot(&self) -> AppState {
        self.lock().state.clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        let listener: Listener = Arc::new(listener);
        inner.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Applies `event`; returns the resulting state.
    pub fn dispatch(&self, event: Event) -> AppState {
        let mut inner = self.lock();
        let next = reduce(&inner.state, &event, &self.locations);
        if next == inner.state {
            return next;
        }
        inner.state = next.clone();
        inner.undelivered = true;
        if inner.delivering {
            return next;
        }
        inner.delivering = true;

        loop {
            inner.undelivered = false;
            let state = inner.state.clone();
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            drop(inner);

            {
                let _delivery = Delivery(self);
                for listener in &listeners {
                    listener(&state);
                }
            }

            inner = self.lock();
            if !inner.undelivered {
                inner.delivering = false;
                break;
            }
        }

        next
    }

    // listeners run unlocked, so a poisoned guard still wraps a whole state
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases the delivery slot if a listener panics.
struct Delivery<'a>(&'a Store);

impl Drop for Delivery<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.lock().delivering = false;
        }
    }
}
