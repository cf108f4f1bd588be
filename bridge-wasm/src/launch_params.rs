//! Platform version from the launch parameters.
//!
//! The host appends launch parameters to the mini app URL, normally in the
//! fragment: `#tgWebAppVersion=7.2&tgWebAppPlatform=ios&...`.

use bridge_traits::VersionSource;
use tracing::trace;
use web_sys::UrlSearchParams;

/// Launch parameter carrying the bridge version.
pub const VERSION_PARAM: &str = "tgWebAppVersion";

fn lookup(query: &str, key: &str) -> Option<String> {
    let query = query.trim_start_matches(['#', '?']);
    if query.is_empty() {
        return None;
    }
    UrlSearchParams::new_with_str(query)
        .ok()?
        .get(key)
        .filter(|value| !value.is_empty())
}

/// Reads `tgWebAppVersion` from the page location.
///
/// The fragment is checked first, then the query string. The location is
/// read on every call.
#[derive(Debug, Clone, Default)]
pub struct LaunchParamsVersion;

impl LaunchParamsVersion {
    /// Create a version source for the current page.
    pub fn new() -> Self {
        Self
    }
}

impl VersionSource for LaunchParamsVersion {
    fn platform_version(&self) -> Option<String> {
        let location = web_sys::window()?.location();
        let version = location
            .hash()
            .ok()
            .and_then(|hash| lookup(&hash, VERSION_PARAM))
            .or_else(|| {
                location
                    .search()
                    .ok()
                    .and_then(|search| lookup(&search, VERSION_PARAM))
            });
        trace!(?version, "Read launch params version");
        version
    }
}
