//! # SDK Configuration Module
//!
//! Provides configuration management for the Mini Apps SDK.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct an
//! [`SdkConfig`] holding the host bridges and the support table. It enforces
//! fail-fast validation so every required bridge is present before any
//! component is created.
//!
//! ## Required Dependencies
//!
//! - `PostEvent` - Outbound transport to the host shell
//! - `VersionSource` - Current bridge version reported by the host
//!
//! When the `desktop-shims` feature is enabled on native targets, the
//! `bridge-desktop` defaults are injected for any bridge not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::SdkConfig;
//! use std::sync::Arc;
//!
//! let config = SdkConfig::builder()
//!     .transport(Arc::new(MyTransport))
//!     .version("7.2")
//!     .support_override("web_app_custom_method", "7.4")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Support Table Overrides
//!
//! The built-in Telegram table can be replaced with
//! [`SdkConfigBuilder::support_table`] or extended with individual entries
//! and JSON documents of the form `{ "method": "version" }`. Overrides are
//! parsed in [`SdkConfigBuilder::build`]; a malformed version fails the build.

use std::fmt;
use std::sync::Arc;

use bridge_traits::{PostEvent, VersionSource};
use core_support::{StaticVersion, SupportContext, SupportTable, Version};

use crate::error::{Error, Result};

/// SDK configuration.
///
/// Use [`SdkConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct SdkConfig {
    /// Outbound transport to the host (required)
    pub transport: Arc<dyn PostEvent>,

    /// Source of the current platform version (required)
    pub version_source: Arc<dyn VersionSource>,

    /// Minimum versions for bridge methods
    pub support_table: Arc<SupportTable>,

    /// Refuse raw `post_event` calls for methods the platform does not support
    pub checked_post_event: bool,
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("transport", &"PostEvent { ... }")
            .field("version_source", &"VersionSource { ... }")
            .field("support_table", &self.support_table.len())
            .field("checked_post_event", &self.checked_post_event)
            .finish()
    }
}

impl SdkConfig {
    /// Creates a new builder for constructing an `SdkConfig`.
    pub fn builder() -> SdkConfigBuilder {
        SdkConfigBuilder::default()
    }

    /// Support context sharing this configuration's version source and table.
    pub fn support_context(&self) -> SupportContext {
        SupportContext::new(
            Arc::clone(&self.version_source),
            Arc::clone(&self.support_table),
        )
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.support_table.is_empty() {
            return Err(Error::Config(
                "Support table is empty; every bridge method would be refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(not(all(feature = "desktop-shims", not(target_arch = "wasm32"))))]
fn transport_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "PostEvent".to_string(),
        message: "A PostEvent transport is required to reach the host shell. \
                 Desktop: enable the 'desktop-shims' feature to use DesktopTransport. \
                 Web: inject bridge_wasm::WebTransport."
            .to_string(),
    }
}

#[cfg(not(all(feature = "desktop-shims", not(target_arch = "wasm32"))))]
fn version_source_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "VersionSource".to_string(),
        message: "A VersionSource is required to decide method support. \
                 Desktop: enable the 'desktop-shims' feature to read the version from the environment. \
                 Web: inject bridge_wasm::LaunchParamsVersion or call .version(..)."
            .to_string(),
    }
}

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
fn provide_default_transport() -> Result<Arc<dyn PostEvent>> {
    use bridge_desktop::DesktopTransport;

    let transport: Arc<dyn PostEvent> = Arc::new(DesktopTransport::new());
    Ok(transport)
}

#[cfg(not(all(feature = "desktop-shims", not(target_arch = "wasm32"))))]
fn provide_default_transport() -> Result<Arc<dyn PostEvent>> {
    Err(transport_missing_error())
}

#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
fn provide_default_version_source() -> Result<Arc<dyn VersionSource>> {
    use bridge_desktop::EnvVersionSource;

    let source: Arc<dyn VersionSource> = Arc::new(EnvVersionSource::default());
    Ok(source)
}

#[cfg(not(all(feature = "desktop-shims", not(target_arch = "wasm32"))))]
fn provide_default_version_source() -> Result<Arc<dyn VersionSource>> {
    Err(version_source_missing_error())
}

/// Builder for constructing [`SdkConfig`] instances.
///
/// Use this builder to incrementally set configuration options and then
/// call [`build()`](SdkConfigBuilder::build) to create the final config.
pub struct SdkConfigBuilder {
    transport: Option<Arc<dyn PostEvent>>,
    version_source: Option<Arc<dyn VersionSource>>,
    support_table: Option<SupportTable>,
    overrides: Vec<(String, String)>,
    override_documents: Vec<String>,
    checked_post_event: bool,
}

impl Default for SdkConfigBuilder {
    fn default() -> Self {
        Self {
            transport: None,
            version_source: None,
            support_table: None,
            overrides: Vec::new(),
            override_documents: Vec::new(),
            checked_post_event: true,
        }
    }
}

impl SdkConfigBuilder {
    /// Sets the outbound transport (required unless `desktop-shims` is enabled).
    pub fn transport(mut self, transport: Arc<dyn PostEvent>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the platform version source.
    pub fn version_source(mut self, source: Arc<dyn VersionSource>) -> Self {
        self.version_source = Some(source);
        self
    }

    /// Uses a fixed platform version.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::SdkConfig;
    ///
    /// let builder = SdkConfig::builder().version("7.2");
    /// ```
    pub fn version(self, version: impl Into<String>) -> Self {
        self.version_source(Arc::new(StaticVersion::new(version)))
    }

    /// Replaces the built-in Telegram support table.
    pub fn support_table(mut self, table: SupportTable) -> Self {
        self.support_table = Some(table);
        self
    }

    /// Adds or replaces the minimum version of a single method.
    pub fn support_override(
        mut self,
        method: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.overrides.push((method.into(), version.into()));
        self
    }

    /// Adds overrides from a JSON object `{ "method": "version" }`.
    ///
    /// Parameter minimums may be given under a `params` key as
    /// `{ "params": { "method": { "param": "version" } } }`.
    pub fn support_overrides_json(mut self, json: impl Into<String>) -> Self {
        self.override_documents.push(json.into());
        self
    }

    /// Enables or disables support checks on raw `post_event` calls.
    ///
    /// Default: true
    pub fn checked_post_event(mut self, enabled: bool) -> Self {
        self.checked_post_event = enabled;
        self
    }

    /// Builds the final [`SdkConfig`].
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] if a required bridge is absent and no
    ///   default is available
    /// - [`Error::Support`] if an override carries a malformed version
    /// - [`Error::Config`] if the resulting support table is empty
    pub fn build(self) -> Result<SdkConfig> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => provide_default_transport()?,
        };

        let version_source = match self.version_source {
            Some(source) => source,
            None => provide_default_version_source()?,
        };

        let mut table = self.support_table.unwrap_or_else(SupportTable::telegram);
        for document in &self.override_documents {
            table.merge(SupportTable::from_json(document)?);
        }
        for (method, version) in self.overrides {
            let version = Version::parse(&version)?;
            table.insert(method, version);
        }

        let config = SdkConfig {
            transport,
            version_source,
            support_table: Arc::new(table),
            checked_post_event: self.checked_post_event,
        };

        config.validate()?;
        tracing::debug!(methods = config.support_table.len(), "SDK configuration built");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as BridgeResult;
    use mockall::mock;
    use serde_json::Value;

    mock! {
        pub Transport {}

        impl PostEvent for Transport {
            fn post_event(&self, method: &str, params: Option<Value>) -> BridgeResult<()>;
        }
    }

    fn transport() -> Arc<dyn PostEvent> {
        Arc::new(MockTransport::new())
    }

    #[test]
    fn test_builder_with_explicit_bridges() {
        let config = SdkConfig::builder()
            .transport(transport())
            .version("6.1")
            .build()
            .unwrap();

        assert!(config.checked_post_event);
        assert!(config
            .support_context()
            .supports("web_app_trigger_haptic_feedback"));
    }

    #[test]
    fn test_overrides_applied_in_order() {
        let config = SdkConfig::builder()
            .transport(transport())
            .version("7.0")
            .support_overrides_json(r#"{ "web_app_custom": "7.5" }"#)
            .support_override("web_app_custom", "6.9")
            .build()
            .unwrap();

        let context = config.support_context();
        assert!(context.supports("web_app_custom"));
        assert_eq!(
            config.support_table.min_version("web_app_custom"),
            Some(&Version::new([6, 9]))
        );
    }

    #[test]
    fn test_malformed_override_fails_build() {
        let err = SdkConfig::builder()
            .transport(transport())
            .version("7.0")
            .support_override("web_app_custom", "seven")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Support(core_support::Error::InvalidVersion { .. })
        ));

        let err = SdkConfig::builder()
            .transport(transport())
            .version("7.0")
            .support_overrides_json("not json")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Support(core_support::Error::InvalidTable(_))
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = SdkConfig::builder()
            .transport(transport())
            .version("7.0")
            .support_table(SupportTable::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_transport_fails_fast() {
        let err = SdkConfig::builder().version("7.0").build().unwrap_err();
        match err {
            Error::CapabilityMissing { capability, .. } => assert_eq!(capability, "PostEvent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_version_source_fails_fast() {
        let err = SdkConfig::builder()
            .transport(transport())
            .build()
            .unwrap_err();
        match err {
            Error::CapabilityMissing { capability, .. } => {
                assert_eq!(capability, "VersionSource")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_desktop_defaults_injected() {
        let config = SdkConfig::builder().build().unwrap();
        assert!(!config.support_table.is_empty());
    }
}
