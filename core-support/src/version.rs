//! Dotted-numeric bridge versions.
//!
//! Versions compare component by component as numbers, so `6.10` is newer
//! than `6.2`. Missing trailing components count as zero (`6.1 == 6.1.0`).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A platform bridge version such as `6.1` or `7.10`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    parts: Vec<u32>,
}

impl Version {
    /// Build a version from numeric components.
    ///
    /// An empty component list is treated as `0`.
    pub fn new(parts: impl IntoIterator<Item = u32>) -> Self {
        let mut parts: Vec<u32> = parts.into_iter().collect();
        if parts.is_empty() {
            parts.push(0);
        }
        Self { parts }
    }

    /// Parse a dotted-numeric version string.
    ///
    /// Surrounding whitespace is ignored. Empty input, empty components and
    /// components that are not plain decimal digits are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid(input, "version is empty"));
        }

        let parts = trimmed
            .split('.')
            .map(|component| {
                if component.is_empty() {
                    return Err(invalid(input, "empty component"));
                }
                if !component.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(
                        input,
                        format!("component {component:?} is not numeric"),
                    ));
                }
                component
                    .parse::<u32>()
                    .map_err(|e| invalid(input, format!("component {component:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// Components without trailing zeros; equal versions share this form.
    fn significant(&self) -> &[u32] {
        let len = self
            .parts
            .iter()
            .rposition(|&part| part != 0)
            .map_or(0, |idx| idx + 1);
        &self.parts[..len]
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> Error {
    Error::InvalidVersion {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for idx in 0..len {
            let left = self.parts.get(idx).copied().unwrap_or(0);
            let right = other.parts.get(idx).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.parts {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
