//! Recording Transport

use std::sync::{Mutex, MutexGuard};

use bridge_traits::{error::Result, PostEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// An event captured by [`DesktopTransport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostedEvent {
    pub method: String,
    pub params: Option<Value>,
}

/// Desktop transport implementation
///
/// There is no host shell on native targets. Every call is logged at `info`
/// and kept in memory in call order so callers can inspect what the SDK
/// would have sent.
#[derive(Debug, Default)]
pub struct DesktopTransport {
    posted: Mutex<Vec<PostedEvent>>,
}

impl DesktopTransport {
    /// Create a new transport with an empty record
    pub fn new() -> Self {
        Self::default()
    }

    fn posted(&self) -> MutexGuard<'_, Vec<PostedEvent>> {
        self.posted.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of every event posted so far, oldest first.
    pub fn events(&self) -> Vec<PostedEvent> {
        self.posted().clone()
    }

    /// Events posted for `method`, oldest first.
    pub fn events_for(&self, method: &str) -> Vec<PostedEvent> {
        self.posted()
            .iter()
            .filter(|event| event.method == method)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posted().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posted().is_empty()
    }

    /// Forget every recorded event.
    pub fn clear(&self) {
        self.posted().clear();
    }
}

impl PostEvent for DesktopTransport {
    fn post_event(&self, method: &str, params: Option<Value>) -> Result<()> {
        match &params {
            Some(params) => info!(method, %params, "Posting event to host"),
            None => info!(method, "Posting event to host"),
        }

        self.posted().push(PostedEvent {
            method: method.to_string(),
            params,
        });
        Ok(())
    }
}
