//! Support table and version oracle.
//!
//! The table maps every bridge method to the first platform version that
//! implements it. Lookups fail closed: a method missing from the table is
//! never considered supported.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::version::Version;

/// JSON form of a table: method minimums at the top level plus an optional
/// `params` section keyed by method, then parameter.
#[derive(Deserialize)]
struct TableDocument {
    #[serde(default)]
    params: HashMap<String, HashMap<String, Version>>,
    #[serde(flatten)]
    methods: HashMap<String, Version>,
}

/// Methods implemented by every host since the first bridge version.
const BASELINE_METHODS: &[&str] = &[
    "iframe_ready",
    "iframe_will_reload",
    "web_app_close",
    "web_app_data_send",
    "web_app_expand",
    "web_app_open_link",
    "web_app_ready",
    "web_app_request_theme",
    "web_app_request_viewport",
    "web_app_setup_closing_behavior",
    "web_app_setup_main_button",
];

/// Methods added after the baseline, with the version that introduced them.
const VERSIONED_METHODS: &[(&str, [u32; 2])] = &[
    ("web_app_open_tg_link", [6, 1]),
    ("web_app_open_invoice", [6, 1]),
    ("web_app_setup_back_button", [6, 1]),
    ("web_app_set_background_color", [6, 1]),
    ("web_app_set_header_color", [6, 1]),
    ("web_app_trigger_haptic_feedback", [6, 1]),
    ("web_app_open_popup", [6, 2]),
    ("web_app_open_scan_qr_popup", [6, 4]),
    ("web_app_close_scan_qr_popup", [6, 4]),
    ("web_app_read_text_from_clipboard", [6, 4]),
    ("web_app_switch_inline_query", [6, 7]),
    ("web_app_invoke_custom_method", [6, 9]),
    ("web_app_request_write_access", [6, 9]),
    ("web_app_request_phone", [6, 9]),
    ("web_app_setup_settings_button", [6, 10]),
    ("web_app_biometry_get_info", [7, 2]),
    ("web_app_biometry_open_settings", [7, 2]),
    ("web_app_biometry_request_access", [7, 2]),
    ("web_app_biometry_request_auth", [7, 2]),
    ("web_app_biometry_update_token", [7, 2]),
    ("web_app_setup_swipe_behavior", [7, 7]),
    ("web_app_share_to_story", [7, 8]),
    ("web_app_setup_secondary_button", [7, 10]),
    ("web_app_set_bottom_bar_color", [7, 10]),
];

/// Method parameters introduced later than the method itself.
const VERSIONED_PARAMS: &[(&str, &str, [u32; 2])] = &[
    ("web_app_open_link", "try_instant_view", [6, 4]),
    ("web_app_set_header_color", "color", [6, 9]),
    ("web_app_close", "return_back", [7, 6]),
    ("web_app_setup_main_button", "has_shine_effect", [7, 10]),
];

/// Minimum platform versions for bridge methods and their parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportTable {
    methods: HashMap<String, Version>,
    params: HashMap<(String, String), Version>,
}

impl SupportTable {
    /// Creates an empty table. Every lookup against it fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for the Telegram Mini Apps bridge.
    pub fn telegram() -> Self {
        let mut table = Self::new();
        for method in BASELINE_METHODS {
            table.insert(*method, Version::new([6, 0]));
        }
        for (method, version) in VERSIONED_METHODS {
            table.insert(*method, Version::new(*version));
        }
        for (method, param, version) in VERSIONED_PARAMS {
            table.insert_param(*method, *param, Version::new(*version));
        }
        table
    }

    /// Builds a table from `(method, version)` pairs.
    ///
    /// Every version string is parsed up front; the first malformed one is
    /// returned as [`Error::InvalidVersion`].
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (method, version) in entries {
            table.insert(method, Version::parse(version.as_ref())?);
        }
        Ok(table)
    }

    /// Parses a JSON object of the form `{ "method": "version", ... }`.
    ///
    /// Parameter minimums go under a reserved `params` key:
    /// `{ "params": { "method": { "param": "version" } } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: TableDocument =
            serde_json::from_str(json).map_err(|e| Error::InvalidTable(e.to_string()))?;
        let params = document
            .params
            .into_iter()
            .flat_map(|(method, params)| {
                params
                    .into_iter()
                    .map(move |(param, version)| ((method.clone(), param), version))
            })
            .collect();
        Ok(Self {
            methods: document.methods,
            params,
        })
    }

    /// Sets the minimum version of `method`, returning the previous one.
    pub fn insert(&mut self, method: impl Into<String>, version: Version) -> Option<Version> {
        self.methods.insert(method.into(), version)
    }

    /// Sets the minimum version of `param` on `method`.
    pub fn insert_param(
        &mut self,
        method: impl Into<String>,
        param: impl Into<String>,
        version: Version,
    ) -> Option<Version> {
        self.params.insert((method.into(), param.into()), version)
    }

    /// Copies every entry of `other` into this table, replacing duplicates.
    pub fn merge(&mut self, other: SupportTable) {
        self.methods.extend(other.methods);
        self.params.extend(other.params);
    }

    pub fn min_version(&self, method: &str) -> Option<&Version> {
        self.methods.get(method)
    }

    pub fn param_min_version(&self, method: &str, param: &str) -> Option<&Version> {
        self.params.get(&(method.to_string(), param.to_string()))
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterates over `(method, minimum version)` entries in arbitrary order.
    pub fn methods(&self) -> impl Iterator<Item = (&str, &Version)> {
        self.methods.iter().map(|(m, v)| (m.as_str(), v))
    }

    /// Returns true if `method` is available at `version`.
    pub fn supports_version(&self, method: &str, version: &Version) -> bool {
        match self.methods.get(method) {
            Some(min) => version >= min,
            None => {
                trace!(method, "method missing from support table");
                false
            }
        }
    }

    /// Returns true if `method` is available at the version string `current`.
    ///
    /// A malformed `current` version is treated as unsupported.
    pub fn supports(&self, method: &str, current: &str) -> bool {
        match Version::parse(current) {
            Ok(version) => self.supports_version(method, &version),
            Err(err) => {
                debug!(method, version = current, error = %err, "unparseable platform version");
                false
            }
        }
    }

    /// Returns true if `method` and its `param` are both available at `version`.
    ///
    /// Parameters without their own entry follow the method.
    pub fn supports_param(&self, method: &str, param: &str, version: &Version) -> bool {
        if !self.supports_version(method, version) {
            return false;
        }
        self.param_min_version(method, param)
            .map_or(true, |min| version >= min)
    }
}
