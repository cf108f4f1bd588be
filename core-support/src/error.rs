use std::fmt;

use thiserror::Error;

/// Identifies which gate refused an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateTag {
    /// Gate derived from a bridge method's version requirement.
    Method(String),
    /// Gate built from a caller-provided predicate.
    Predicate,
}

impl fmt::Display for GateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateTag::Method(method) => f.write_str(method),
            GateTag::Predicate => f.write_str("<unnamed predicate>"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Method is not supported: {0}")]
    NotSupported(GateTag),

    #[error("Invalid version {input:?}: {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Invalid support table: {0}")]
    InvalidTable(String),
}

impl Error {
    /// Returns true for the refusal raised by a gated function.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Error::NotSupported(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
