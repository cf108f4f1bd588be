//! Platform Version Source
//!
//! The host reports the bridge version it implements (`tgWebAppVersion` on the
//! web). The value can change while the app is running, e.g. after the host
//! application updates, so consumers read it on every query instead of
//! caching it.

use crate::platform::PlatformSendSync;

/// Accessor for the current platform version string.
pub trait VersionSource: PlatformSendSync {
    /// Current version reported by the host, or `None` if unknown.
    fn platform_version(&self) -> Option<String>;
}
