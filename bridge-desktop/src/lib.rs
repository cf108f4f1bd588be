//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for native hosts
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! A mini app normally runs inside a Telegram web view. When the SDK is used
//! from a native process (development tools, tests, headless runners) there
//! is no host shell to talk to, so this crate provides stand-ins:
//! - `DesktopTransport` records every posted event and logs it through `tracing`
//! - `EnvVersionSource` reads the platform version from an environment variable
//!
//! `core-runtime` injects both when its `desktop-shims` feature is enabled and
//! no bridge was supplied explicitly.
//!
//! ## Usage
//!
//! ```
//! use bridge_desktop::DesktopTransport;
//! use bridge_traits::PostEvent;
//!
//! let transport = DesktopTransport::new();
//! transport.post_event("web_app_ready", None).unwrap();
//!
//! assert_eq!(transport.events()[0].method, "web_app_ready");
//! ```

mod transport;
mod version;

pub use transport::{DesktopTransport, PostedEvent};
pub use version::{EnvVersionSource, DEFAULT_VERSION_VAR};
