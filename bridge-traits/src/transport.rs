//! Outbound Transport Abstraction
//!
//! The host shell receives method calls through a fire-and-forget channel:
//! - **Web**: `window.parent.postMessage` from inside the iframe
//! - **Mobile**: `window.TelegramWebviewProxy.postEvent`
//! - **Desktop**: an in-process recorder used for development and tests
//!
//! No response is read back. The returned `Result` only reports a local
//! dispatch failure such as a missing parent window.

use serde::Serialize;
use serde_json::Value;

use crate::{error::Result, platform::PlatformSendSync};

/// Sends a named method call with an optional JSON payload to the host.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::transport::PostEvent;
/// use serde_json::json;
///
/// fn expand(transport: &dyn PostEvent) {
///     transport.post_event("web_app_expand", None).ok();
/// }
/// ```
pub trait PostEvent: PlatformSendSync {
    /// Dispatch `method` (e.g. `web_app_trigger_haptic_feedback`) with
    /// `params` to the host.
    fn post_event(&self, method: &str, params: Option<Value>) -> Result<()>;
}

/// Serialized message shape understood by the web host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage<'a> {
    pub event_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<&'a Value>,
}

impl<'a> OutboundMessage<'a> {
    pub fn new(event_type: &'a str, event_data: Option<&'a Value>) -> Self {
        Self {
            event_type,
            event_data,
        }
    }

    /// Encode as the JSON string the host expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
