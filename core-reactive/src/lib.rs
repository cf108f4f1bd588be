//! # Reactive Bindings
//!
//! Framework-neutral glue between observable SDK objects and a UI layer.
//!
//! A UI component owns a [`ForceUpdate`] whose render callback schedules a
//! re-render in the host framework. While mounted, it keeps an
//! [`EventsTracking`] guard that routes the chosen events of any
//! [`Trackable`](bridge_traits::Trackable) into that callback. Unmounting is
//! dropping the guard.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use core_reactive::{use_events_tracking, ForceUpdate};
//! use core_runtime::EventEmitter;
//!
//! let emitter = EventEmitter::new();
//! let renders = Arc::new(AtomicUsize::new(0));
//! let counter = renders.clone();
//! let update = ForceUpdate::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! {
//!     let _tracking = use_events_tracking(&emitter, ["change"], &update);
//!     emitter.emit(&"change");
//! }
//! emitter.emit(&"change");
//!
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! ```

pub mod force_update;
pub mod tracking;

pub use force_update::{ForceUpdate, REVISION_MODULUS};
pub use tracking::{use_events_tracking, EventsTracking};
