//! Scoped event subscriptions.
//!
//! [`EventsTracking`] ties a listener registration to a value's lifetime: it
//! registers on creation and unregisters, with the very same listener, when
//! dropped. Changing the event set means dropping the guard and creating a
//! new one.

use std::fmt;

use bridge_traits::{Listener, Trackable};
use tracing::trace;

use crate::force_update::ForceUpdate;

/// Active subscription of one listener to a fixed set of events.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct EventsTracking<'a, T>
where
    T: Trackable + ?Sized,
{
    trackable: &'a T,
    events: Vec<T::Event>,
    listener: Listener,
    subscribed: bool,
}

impl<'a, T> EventsTracking<'a, T>
where
    T: Trackable + ?Sized,
{
    /// Register `listener` on `trackable` for each of `events`.
    ///
    /// The event list is captured here and used unchanged on teardown.
    pub fn subscribe<I>(trackable: &'a T, events: I, listener: Listener) -> Self
    where
        I: IntoIterator<Item = T::Event>,
    {
        let events: Vec<T::Event> = events.into_iter().collect();
        for event in &events {
            trackable.on(event.clone(), listener.clone());
        }
        trace!(events = events.len(), "Events tracking started");

        Self {
            trackable,
            events,
            listener,
            subscribed: true,
        }
    }

    pub fn events(&self) -> &[T::Event] {
        &self.events
    }

    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Remove every registration now instead of at drop.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.subscribed {
            return;
        }
        self.subscribed = false;
        for event in &self.events {
            self.trackable.off(event.clone(), &self.listener);
        }
        trace!(events = self.events.len(), "Events tracking stopped");
    }
}

impl<T> Drop for EventsTracking<'_, T>
where
    T: Trackable + ?Sized,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for EventsTracking<'_, T>
where
    T: Trackable + ?Sized,
    T::Event: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventsTracking")
            .field("events", &self.events)
            .field("subscribed", &self.subscribed)
            .finish_non_exhaustive()
    }
}

/// Re-render through `force_update` whenever any of `events` fires on
/// `trackable`, for as long as the returned guard lives.
pub fn use_events_tracking<'a, T, I>(
    trackable: &'a T,
    events: I,
    force_update: &ForceUpdate,
) -> EventsTracking<'a, T>
where
    T: Trackable + ?Sized,
    I: IntoIterator<Item = T::Event>,
{
    EventsTracking::subscribe(trackable, events, force_update.listener())
}
