use bridge_traits::BridgeError;
use core_components::ComponentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Core initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error(transparent)]
    Support(#[from] core_support::Error),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Runtime error: {0}")]
    Runtime(core_runtime::Error),
}

impl CoreError {
    /// True if the platform does not support the requested method.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, CoreError::Support(e) if e.is_not_supported())
    }
}

impl From<core_runtime::Error> for CoreError {
    fn from(err: core_runtime::Error) -> Self {
        match err {
            core_runtime::Error::CapabilityMissing {
                capability,
                message,
            } => CoreError::CapabilityMissing {
                capability,
                message,
            },
            core_runtime::Error::Support(e) => CoreError::Support(e),
            other => CoreError::Runtime(other),
        }
    }
}

impl From<ComponentError> for CoreError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::Support(e) => CoreError::Support(e),
            ComponentError::Bridge(e) => CoreError::Bridge(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
