//! Event Listener Contracts
//!
//! [`Trackable`] is implemented by every object whose state changes can be
//! observed. Registration is symmetric: the exact [`Listener`] passed to
//! [`Trackable::on`] must be passed to [`Trackable::off`] to remove it.

use std::sync::Arc;

use crate::platform::DynListener;

/// Shared event callback. Identity is the identity of the allocation.
pub type Listener = Arc<DynListener>;

/// Object that supports symmetric event subscription.
pub trait Trackable {
    /// Event names accepted by this object.
    type Event: Clone;

    /// Register `listener` for `event`.
    fn on(&self, event: Self::Event, listener: Listener);

    /// Remove a previously registered `listener` for `event`.
    ///
    /// Removing a listener that was never registered is a no-op.
    fn off(&self, event: Self::Event, listener: &Listener);
}

/// Returns true if both handles point at the same listener allocation.
pub fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
