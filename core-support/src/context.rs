//! Support context: the current platform version plus the support table.
//!
//! Every query reads the version from its [`VersionSource`] again, so a host
//! update that bumps the version is visible without rebuilding anything that
//! holds the context.

use std::fmt;
use std::sync::{Arc, RwLock};

use bridge_traits::VersionSource;
use tracing::debug;

use crate::table::SupportTable;
use crate::version::Version;

/// Shared handle used by gates and components to answer support queries.
#[derive(Clone)]
pub struct SupportContext {
    version_source: Arc<dyn VersionSource>,
    table: Arc<SupportTable>,
}

impl SupportContext {
    pub fn new(version_source: Arc<dyn VersionSource>, table: Arc<SupportTable>) -> Self {
        Self {
            version_source,
            table,
        }
    }

    /// Context backed by the built-in Telegram support table.
    pub fn with_default_table(version_source: Arc<dyn VersionSource>) -> Self {
        Self::new(version_source, Arc::new(SupportTable::telegram()))
    }

    pub fn table(&self) -> &SupportTable {
        &self.table
    }

    /// Reads and parses the current platform version.
    ///
    /// Returns `None` when the host has not reported a version or reported
    /// one that cannot be parsed.
    pub fn current_version(&self) -> Option<Version> {
        let raw = self.version_source.platform_version()?;
        match Version::parse(&raw) {
            Ok(version) => Some(version),
            Err(err) => {
                debug!(version = %raw, error = %err, "ignoring malformed platform version");
                None
            }
        }
    }

    /// Returns true if `method` is available on the current platform version.
    pub fn supports(&self, method: &str) -> bool {
        self.current_version()
            .is_some_and(|version| self.table.supports_version(method, &version))
    }

    /// Returns true if `method` and its `param` are available on the current
    /// platform version.
    pub fn supports_param(&self, method: &str, param: &str) -> bool {
        self.current_version()
            .is_some_and(|version| self.table.supports_param(method, param, &version))
    }
}

impl fmt::Debug for SupportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportContext")
            .field("version_source", &"VersionSource { ... }")
            .field("methods", &self.table.len())
            .finish()
    }
}

/// Version source with a fixed value.
#[derive(Debug, Clone, Default)]
pub struct StaticVersion(Option<String>);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// A source that never reports a version.
    pub fn unknown() -> Self {
        Self(None)
    }
}

impl VersionSource for StaticVersion {
    fn platform_version(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Version source whose value can be replaced at runtime, e.g. when the host
/// reports a new version after an update.
#[derive(Debug, Default)]
pub struct SharedVersion {
    current: RwLock<Option<String>>,
}

impl SharedVersion {
    pub fn new(version: Option<String>) -> Self {
        Self {
            current: RwLock::new(version),
        }
    }

    /// Replace the current version.
    pub fn set(&self, version: Option<String>) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = version;
    }
}

impl VersionSource for SharedVersion {
    fn platform_version(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Source {}

        impl VersionSource for Source {
            fn platform_version(&self) -> Option<String>;
        }
    }

    #[test]
    fn test_unknown_version_is_unsupported() {
        let ctx = SupportContext::with_default_table(Arc::new(StaticVersion::unknown()));
        assert_eq!(ctx.current_version(), None);
        assert!(!ctx.supports("web_app_expand"));
    }

    #[test]
    fn test_malformed_version_is_unsupported() {
        let ctx = SupportContext::with_default_table(Arc::new(StaticVersion::new("seven")));
        assert_eq!(ctx.current_version(), None);
        assert!(!ctx.supports("web_app_expand"));
    }

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_malformed_version_polling_stays_below_warn() {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let ctx = SupportContext::with_default_table(Arc::new(StaticVersion::new("seven")));
        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..100 {
                assert!(!ctx.supports("web_app_expand"));
                assert!(!ctx.table().supports("web_app_expand", "seven"));
            }
        });

        assert!(output.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_version_is_read_on_every_query() {
        let mut source = MockSource::new();
        source
            .expect_platform_version()
            .times(3)
            .returning(|| Some("6.1".to_string()));

        let ctx = SupportContext::with_default_table(Arc::new(source));
        assert!(ctx.supports("web_app_trigger_haptic_feedback"));
        assert!(ctx.supports("web_app_setup_back_button"));
        assert!(!ctx.supports("web_app_open_popup"));
    }

    #[test]
    fn test_shared_version_bump() {
        let source = Arc::new(SharedVersion::new(Some("6.0".to_string())));
        let ctx = SupportContext::with_default_table(source.clone());

        assert!(!ctx.supports("web_app_trigger_haptic_feedback"));
        source.set(Some("6.1".to_string()));
        assert!(ctx.supports("web_app_trigger_haptic_feedback"));
        source.set(None);
        assert!(!ctx.supports("web_app_trigger_haptic_feedback"));
    }

    #[test]
    fn test_supports_param_uses_current_version() {
        let source = Arc::new(SharedVersion::new(Some("6.4".to_string())));
        let ctx = SupportContext::with_default_table(source.clone());

        assert!(ctx.supports_param("web_app_open_link", "try_instant_view"));
        source.set(Some("6.3".to_string()));
        assert!(!ctx.supports_param("web_app_open_link", "try_instant_view"));
        assert!(ctx.supports("web_app_open_link"));
    }
}
