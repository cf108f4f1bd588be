//! WebAssembly Bridge Implementations
//!
//! Browser implementations of the bridge traits defined in `bridge-traits`,
//! built on `web-sys` and `wasm-bindgen`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to an empty crate elsewhere.
//!
//! # Implementations
//!
//! - `WebTransport`: `postMessage` to the parent frame, or
//!   `TelegramWebviewProxy.postEvent` in native clients
//! - `LaunchParamsVersion`: `tgWebAppVersion` from the page URL
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::{build_wasm_bridges, WasmBridgeConfig};
//!
//! let bridges = build_wasm_bridges(WasmBridgeConfig::default())?;
//! bridges.transport.post_event("web_app_ready", None)?;
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod error;
pub mod launch_params;
pub mod transport;

// Re-export commonly used types
pub use bootstrap::{build_wasm_bridges, WasmBridgeConfig, WasmBridgeSet};
pub use error::{WasmError, WasmResult};
pub use launch_params::{LaunchParamsVersion, VERSION_PARAM};
pub use transport::{is_iframe, WebTransport, DEFAULT_TARGET_ORIGIN};
