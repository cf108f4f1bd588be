//! # Capability Support
//!
//! Decides, per call, whether a bridge capability may be used on the current
//! platform version.
//!
//! ## Overview
//!
//! - [`Version`](version::Version) - Dotted-numeric versions with numeric ordering
//! - [`SupportTable`](table::SupportTable) - Minimum version per bridge method (the oracle)
//! - [`SupportContext`](context::SupportContext) - Version source plus table, read fresh per query
//! - [`SupportGated`](gate::SupportGated) - Function wrapper exposing `is_supported()` and
//!   refusing `invoke()` with [`Error::NotSupported`](error::Error::NotSupported)
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use core_support::{SharedVersion, SupportContext, SupportGated};
//!
//! let version = Arc::new(SharedVersion::new(Some("6.0".to_string())));
//! let context = SupportContext::with_default_table(version.clone());
//! let haptic = SupportGated::with_method(|| "buzz", &context, "web_app_trigger_haptic_feedback");
//!
//! assert!(haptic.invoke(()).is_err());
//!
//! version.set(Some("6.1".to_string()));
//! assert_eq!(haptic.invoke(()).unwrap(), "buzz");
//! ```

pub mod context;
pub mod error;
pub mod gate;
pub mod table;
pub mod version;

pub use context::{SharedVersion, StaticVersion, SupportContext};
pub use error::{Error, GateTag, Result};
pub use gate::{with_is_supported, Callable, GateSpec, Predicate, SupportGated};
pub use table::SupportTable;
pub use version::Version;
