//! WebAssembly bindings for the SDK façade
//!
//! JavaScript-friendly wrappers over [`Sdk`] using wasm-bindgen. Errors are
//! surfaced to JavaScript as strings.

use core_components::{ImpactStyle, NotificationType};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::{bootstrap_wasm, Sdk, WasmBridgeConfig};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-accessible SDK handle
#[wasm_bindgen]
pub struct JsMiniAppsSdk {
    inner: Sdk,
}

#[wasm_bindgen]
impl JsMiniAppsSdk {
    /// Bootstrap against the current page, optionally overriding the
    /// `postMessage` target origin.
    #[wasm_bindgen(constructor)]
    pub fn new(target_origin: Option<String>) -> Result<JsMiniAppsSdk, JsValue> {
        let config = match target_origin {
            Some(origin) => WasmBridgeConfig::new(origin),
            None => WasmBridgeConfig::default(),
        };
        bootstrap_wasm(config)
            .map(|inner| JsMiniAppsSdk { inner })
            .map_err(js_error)
    }

    /// Current platform version as reported by the host
    pub fn version(&self) -> Option<String> {
        self.inner.version().map(|v| v.to_string())
    }

    pub fn supports(&self, method: &str) -> bool {
        self.inner.supports(method)
    }

    /// Post a raw bridge call with an optional JSON-encoded payload
    #[wasm_bindgen(js_name = postEvent)]
    pub fn post_event(&self, method: &str, params_json: Option<String>) -> Result<(), JsValue> {
        let params = params_json
            .map(|json| serde_json::from_str::<Value>(&json))
            .transpose()
            .map_err(js_error)?;
        self.inner.post_event(method, params).map_err(js_error)
    }

    #[wasm_bindgen(js_name = impactOccurred)]
    pub fn impact_occurred(&self, style: &str) -> Result<(), JsValue> {
        let style: ImpactStyle =
            serde_json::from_value(Value::String(style.to_string())).map_err(js_error)?;
        self.inner
            .haptic_feedback()
            .impact_occurred(style)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = notificationOccurred)]
    pub fn notification_occurred(&self, kind: &str) -> Result<(), JsValue> {
        let kind: NotificationType =
            serde_json::from_value(Value::String(kind.to_string())).map_err(js_error)?;
        self.inner
            .haptic_feedback()
            .notification_occurred(kind)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = selectionChanged)]
    pub fn selection_changed(&self) -> Result<(), JsValue> {
        self.inner
            .haptic_feedback()
            .selection_changed()
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = enableClosingConfirmation)]
    pub fn enable_closing_confirmation(&self) -> Result<(), JsValue> {
        self.inner
            .closing_behavior()
            .enable_confirmation()
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = disableClosingConfirmation)]
    pub fn disable_closing_confirmation(&self) -> Result<(), JsValue> {
        self.inner
            .closing_behavior()
            .disable_confirmation()
            .map_err(js_error)
    }
}
