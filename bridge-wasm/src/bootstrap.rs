//! Convenience helpers for wiring the wasm bridge implementations together.
//!
//! Host pages use [`build_wasm_bridges`] to get the transport and version
//! source for the current browser context. The result mirrors the role that
//! the `bridge-desktop` crate plays for native targets.

use std::sync::Arc;

use bridge_traits::{
    error::{BridgeError, Result as BridgeResult},
    PostEvent, VersionSource,
};
use tracing::debug;

use crate::{
    launch_params::LaunchParamsVersion,
    transport::{is_iframe, WebTransport, DEFAULT_TARGET_ORIGIN},
};

/// Configuration for [`build_wasm_bridges`].
#[derive(Debug, Clone)]
pub struct WasmBridgeConfig {
    /// Origin passed to `postMessage` when running inside an iframe.
    pub target_origin: String,
    /// Route Rust panics to the browser console.
    pub install_panic_hook: bool,
}

impl WasmBridgeConfig {
    /// Create a config posting to `target_origin`, with the panic hook on.
    pub fn new(target_origin: impl Into<String>) -> Self {
        Self {
            target_origin: target_origin.into(),
            install_panic_hook: true,
        }
    }

    /// Enable or disable the console panic hook.
    pub fn with_panic_hook(mut self, install: bool) -> Self {
        self.install_panic_hook = install;
        self
    }
}

impl Default for WasmBridgeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_ORIGIN)
    }
}

/// Browser bridge objects ready for injection into the SDK configuration.
pub struct WasmBridgeSet {
    /// `postMessage` / webview proxy transport.
    pub transport: Arc<dyn PostEvent>,
    /// Version read from the launch parameters.
    pub version_source: Arc<dyn VersionSource>,
}

/// Build the default wasm bridge stack.
///
/// # Errors
///
/// Returns [`BridgeError::NotAvailable`] outside a browser window.
pub fn build_wasm_bridges(config: WasmBridgeConfig) -> BridgeResult<WasmBridgeSet> {
    if web_sys::window().is_none() {
        return Err(BridgeError::NotAvailable("window".into()));
    }
    if config.install_panic_hook {
        console_error_panic_hook::set_once();
    }
    debug!(
        target_origin = %config.target_origin,
        iframe = is_iframe(),
        "Building wasm bridges"
    );

    let transport: Arc<dyn PostEvent> = Arc::new(WebTransport::new(config.target_origin));
    let version_source: Arc<dyn VersionSource> = Arc::new(LaunchParamsVersion::new());

    Ok(WasmBridgeSet {
        transport,
        version_source,
    })
}
