//! Core service façade and bootstrap helpers.
//!
//! This crate wires the host bridges (transport and version source) into the
//! support model and the bridge components. Desktop builds typically enable
//! the `desktop-shims` feature (which depends on `bridge-desktop`), whereas
//! WebAssembly builds enable the `wasm` feature and rely on the adapters from
//! `bridge-wasm`.
//!
//! ```
//! # #[cfg(feature = "desktop-shims")]
//! # fn example() -> core_service::Result<()> {
//! use core_runtime::SdkConfig;
//! use core_service::Sdk;
//!
//! let sdk = Sdk::new(SdkConfig::builder().version("6.1").build()?)?;
//! if sdk.haptic_feedback().is_supported() {
//!     sdk.haptic_feedback().selection_changed()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

pub use error::{CoreError, Result};

use std::fmt;

use core_components::{ClosingBehavior, HapticFeedback};
use core_runtime::SdkConfig;
use core_support::{GateSpec, SupportContext, SupportGated, Version};
use serde_json::Value;
use tracing::{debug, info};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bridge_wasm::WasmBridgeConfig;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
use bridge_wasm::build_wasm_bridges;

/// Primary façade exposed to mini apps.
pub struct Sdk {
    config: SdkConfig,
    context: SupportContext,
    haptic_feedback: HapticFeedback,
    closing_behavior: ClosingBehavior,
}

impl Sdk {
    /// Create the SDK from a validated configuration.
    pub fn new(config: SdkConfig) -> Result<Self> {
        config.validate()?;

        let context = config.support_context();
        let haptic_feedback = HapticFeedback::new(config.transport.clone(), &context);
        let closing_behavior = ClosingBehavior::new(config.transport.clone(), &context, false);

        info!(
            version = ?context.current_version().map(|v| v.to_string()),
            methods = context.table().len(),
            "Mini Apps SDK initialized"
        );

        Ok(Self {
            config,
            context,
            haptic_feedback,
            closing_behavior,
        })
    }

    /// Create the SDK with the platform default bridges.
    ///
    /// Fails with [`CoreError::CapabilityMissing`] when no default exists for
    /// the current target.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SdkConfig::builder().build()?)
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn support_context(&self) -> &SupportContext {
        &self.context
    }

    /// Current platform version, if the host reports a valid one.
    pub fn version(&self) -> Option<Version> {
        self.context.current_version()
    }

    /// True if the host currently supports `method`.
    pub fn supports(&self, method: &str) -> bool {
        self.context.supports(method)
    }

    /// True if the host currently supports `param` of `method`.
    pub fn supports_param(&self, method: &str, param: &str) -> bool {
        self.context.supports_param(method, param)
    }

    /// Post a raw bridge call.
    ///
    /// With `checked_post_event` enabled (the default) the call is refused
    /// with a not-supported error when the host does not implement `method`.
    pub fn post_event(&self, method: &str, params: Option<Value>) -> Result<()> {
        let transport = &self.config.transport;
        let send = |params: Option<Value>| transport.post_event(method, params);

        if !self.config.checked_post_event {
            debug!(method, "Posting unchecked event");
            return Ok(send(params)?);
        }

        let gated = SupportGated::new(send, GateSpec::method(&self.context, method));
        gated.invoke((params,))??;
        Ok(())
    }

    pub fn haptic_feedback(&self) -> &HapticFeedback {
        &self.haptic_feedback
    }

    pub fn closing_behavior(&self) -> &ClosingBehavior {
        &self.closing_behavior
    }
}

impl fmt::Debug for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdk")
            .field("config", &self.config)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Convenience bootstrapper for WebAssembly hosts.
///
/// ```ignore
/// use core_service::{bootstrap_wasm, WasmBridgeConfig};
///
/// let sdk = bootstrap_wasm(WasmBridgeConfig::default())?;
/// sdk.post_event("web_app_ready", None)?;
/// ```
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn bootstrap_wasm(config: WasmBridgeConfig) -> Result<Sdk> {
    let bridges = build_wasm_bridges(config)
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    let config = SdkConfig::builder()
        .transport(bridges.transport)
        .version_source(bridges.version_source)
        .build()?;
    Sdk::new(config)
}
