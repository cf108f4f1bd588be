//! # Event Emitter
//!
//! Named-event emitter used by SDK components to announce state changes.
//!
//! ## Overview
//!
//! [`EventEmitter`] stores [`Listener`]s per event name and implements
//! [`Trackable`], so any component that owns one can be observed by the UI
//! binding layer. Listeners are plain callbacks with no payload: observers
//! react to "something changed" and re-read state from the component.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use bridge_traits::Listener;
//! use core_runtime::events::EventEmitter;
//!
//! let emitter = EventEmitter::new();
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = hits.clone();
//! let listener: Listener = Arc::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! emitter.on("change", listener.clone());
//! emitter.emit(&"change");
//! emitter.off(&"change", &listener);
//! emitter.emit(&"change");
//!
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! ```
//!
//! ## Re-entrancy
//!
//! The listener table is locked only while it is read or modified. `emit`
//! snapshots the listeners for the event and releases the lock before calling
//! them, so a listener may register or remove listeners (including itself).
//! Such changes take effect from the next `emit`.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use bridge_traits::{same_listener, Listener, Trackable};
use tracing::trace;

/// Listener registry keyed by event name.
pub struct EventEmitter<E> {
    listeners: Mutex<HashMap<E, Vec<Listener>>>,
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
        }
    }
}

impl<E> EventEmitter<E>
where
    E: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<E, Vec<Listener>>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `listener` for `event`.
    ///
    /// Registering the same listener twice means it runs twice per emit and
    /// needs two `off` calls to be fully removed.
    pub fn on(&self, event: E, listener: Listener) {
        trace!(?event, "listener added");
        self.table().entry(event).or_default().push(listener);
    }

    /// Remove one registration of `listener` for `event`.
    ///
    /// Returns false if the listener was not registered for that event.
    pub fn off(&self, event: &E, listener: &Listener) -> bool {
        let mut table = self.table();
        let Some(listeners) = table.get_mut(event) else {
            return false;
        };
        let Some(idx) = listeners.iter().position(|l| same_listener(l, listener)) else {
            return false;
        };
        listeners.remove(idx);
        if listeners.is_empty() {
            table.remove(event);
        }
        trace!(?event, "listener removed");
        true
    }

    /// Call every listener registered for `event`, in registration order.
    ///
    /// Returns the number of listeners called.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener> = match self.table().get(event) {
            Some(listeners) => listeners.clone(),
            None => return 0,
        };
        trace!(?event, listeners = snapshot.len(), "emitting event");
        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }

    pub fn listener_count(&self, event: &E) -> usize {
        self.table().get(event).map_or(0, Vec::len)
    }

    /// Remove every listener for every event.
    pub fn clear(&self) {
        self.table().clear();
    }
}

impl<E> Trackable for EventEmitter<E>
where
    E: Eq + Hash + Clone + fmt::Debug,
{
    type Event = E;

    fn on(&self, event: E, listener: Listener) {
        EventEmitter::on(self, event, listener);
    }

    fn off(&self, event: E, listener: &Listener) {
        EventEmitter::off(self, &event, listener);
    }
}

impl<E: fmt::Debug> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        let counts: Vec<(&E, usize)> = table.iter().map(|(e, l)| (e, l.len())).collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}
