//! # Bridge Components
//!
//! Typed wrappers over individual bridge methods.
//!
//! Each component holds the transport and a [`SupportContext`] and builds its
//! operations as capability-gated functions: a call on a host that does not
//! implement the underlying method fails with a not-supported error instead
//! of posting a message the host would ignore.
//!
//! Stateful components implement [`Trackable`] so UI bindings can re-render
//! when they change.
//!
//! [`SupportContext`]: core_support::SupportContext
//! [`Trackable`]: bridge_traits::Trackable

pub mod closing_behavior;
pub mod error;
pub mod haptic_feedback;

pub use closing_behavior::{ClosingBehavior, ClosingBehaviorEvent};
pub use error::{ComponentError, Result};
pub use haptic_feedback::{HapticFeedback, HapticMethod, ImpactStyle, NotificationType};
