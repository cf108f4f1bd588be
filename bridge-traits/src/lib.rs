//! # Host Bridge Traits
//!
//! Contracts between the SDK core and the host shell that embeds the mini app.
//!
//! ## Overview
//!
//! The SDK never talks to the host directly. Each capability the core needs
//! is expressed as a trait here and implemented per platform:
//!
//! - [`PostEvent`](transport::PostEvent) - Fire-and-forget method calls to the host
//! - [`VersionSource`](version::VersionSource) - Current bridge version reported by the host
//! - [`Trackable`](events::Trackable) - Symmetric `on`/`off` event registration
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Desktop  | `bridge-desktop`    |
//! | Web      | `bridge-wasm`       |
//!
//! ## Error Handling
//!
//! Bridge implementations report local failures through
//! [`BridgeError`](error::BridgeError). Whether a method is *supported* is not
//! a bridge concern; that decision belongs to `core-support`.
//!
//! ## Thread Safety
//!
//! On native targets all traits require `Send + Sync` through
//! [`PlatformSendSync`](platform::PlatformSendSync). On `wasm32` the bounds
//! are dropped because browser handles are single-threaded.

pub mod error;
pub mod events;
pub mod logging;
pub mod platform;
pub mod transport;
pub mod version;

pub use error::BridgeError;

// Re-export commonly used types
pub use events::{same_listener, Listener, Trackable};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use platform::{DynListener, DynPredicate, PlatformSendSync};
pub use transport::{OutboundMessage, PostEvent};
pub use version::VersionSource;
