//! Environment-backed Version Source

use std::env;

use bridge_traits::VersionSource;
use tracing::trace;

/// Variable read by [`EnvVersionSource::default`].
pub const DEFAULT_VERSION_VAR: &str = "MINI_APPS_PLATFORM_VERSION";

/// Reads the platform version from an environment variable.
///
/// The variable is read on every call so a running process observes changes.
/// An unset, empty or non-unicode value means the version is unknown.
#[derive(Debug, Clone)]
pub struct EnvVersionSource {
    var: String,
}

impl EnvVersionSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvVersionSource {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_VAR)
    }
}

impl VersionSource for EnvVersionSource {
    fn platform_version(&self) -> Option<String> {
        let version = env::var(&self.var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        trace!(var = %self.var, ?version, "Read platform version");
        version
    }
}
