//! # Component Error Types

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors returned by bridge components.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The call was refused by its support gate. Nothing was sent.
    #[error(transparent)]
    Support(#[from] core_support::Error),

    /// The call was allowed but the transport failed to dispatch it.
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

impl ComponentError {
    /// True if the platform does not support the requested method.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, ComponentError::Support(e) if e.is_not_supported())
    }
}

pub type Result<T> = std::result::Result<T, ComponentError>;
