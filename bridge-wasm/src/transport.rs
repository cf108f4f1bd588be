//! Browser transport to the Telegram host.
//!
//! Inside the web client the mini app runs in an iframe and talks to the
//! parent window with `postMessage`. Mobile and desktop clients inject
//! `window.TelegramWebviewProxy` instead.

use bridge_traits::{error::Result as BridgeResult, OutboundMessage, PostEvent};
use js_sys::{Function, Object, Reflect};
use serde_json::Value;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::error::{WasmError, WasmResult};

/// Origin the web client is served from.
pub const DEFAULT_TARGET_ORIGIN: &str = "https://web.telegram.org";

const WEBVIEW_PROXY: &str = "TelegramWebviewProxy";

fn window() -> WasmResult<Window> {
    web_sys::window().ok_or_else(|| WasmError::NotAvailable("window".into()))
}

/// True when the current document is framed by another window.
///
/// An inaccessible top window also counts as framed.
pub fn is_iframe() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.top() {
        Ok(Some(top)) => !Object::is(window.as_ref(), top.as_ref()),
        Ok(None) => false,
        Err(_) => true,
    }
}

/// `PostEvent` implementation for browsers.
#[derive(Debug, Clone)]
pub struct WebTransport {
    target_origin: String,
}

impl WebTransport {
    /// Create a transport that posts to `target_origin` when framed.
    pub fn new(target_origin: impl Into<String>) -> Self {
        Self {
            target_origin: target_origin.into(),
        }
    }

    /// Origin used for `postMessage`.
    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }

    fn post_to_parent(
        &self,
        window: &Window,
        method: &str,
        params: Option<&Value>,
    ) -> WasmResult<()> {
        let message = OutboundMessage::new(method, params);
        let encoded = serde_json::to_string(&message)?;
        let parent = window
            .parent()?
            .ok_or_else(|| WasmError::NotAvailable("parent window".into()))?;
        parent.post_message(&JsValue::from_str(&encoded), &self.target_origin)?;
        Ok(())
    }

    fn post_to_proxy(proxy: &JsValue, method: &str, params: Option<&Value>) -> WasmResult<()> {
        let post = Reflect::get(proxy, &JsValue::from_str("postEvent"))?
            .dyn_into::<Function>()
            .map_err(|_| WasmError::NotAvailable("TelegramWebviewProxy.postEvent".into()))?;
        let data = match params {
            Some(params) => JsValue::from_str(&serde_json::to_string(params)?),
            None => JsValue::UNDEFINED,
        };
        post.call2(proxy, &JsValue::from_str(method), &data)?;
        Ok(())
    }

    fn dispatch(&self, method: &str, params: Option<&Value>) -> WasmResult<()> {
        let window = window()?;

        if is_iframe() {
            debug!(method, target_origin = %self.target_origin, "Posting event to parent window");
            return self.post_to_parent(&window, method, params);
        }

        let proxy = Reflect::get(window.as_ref(), &JsValue::from_str(WEBVIEW_PROXY))?;
        if proxy.is_object() {
            debug!(method, "Posting event to webview proxy");
            return Self::post_to_proxy(&proxy, method, params);
        }

        Err(WasmError::NotAvailable(
            "no parent window or TelegramWebviewProxy to post events to".into(),
        ))
    }
}

impl Default for WebTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_ORIGIN)
    }
}

impl PostEvent for WebTransport {
    fn post_event(&self, method: &str, params: Option<Value>) -> BridgeResult<()> {
        self.dispatch(method, params.as_ref())?;
        Ok(())
    }
}
