//! Python version parsing and comparison.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{DoctorError, Result};

static RE_PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A running interpreter's version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// Accepts pre-release suffixes (`Python 3.13.0rc1`) and a missing
    /// micro component (`Python 3.9`).
    pub fn parse(output: &str) -> Result<Self> {
        let caps = RE_PYTHON_VERSION
            .captures(output)
            .ok_or_else(|| DoctorError::VersionParse {
                output: output.trim().to_string(),
            })?;

        let component = |i: usize| -> Result<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().map_err(|_| DoctorError::VersionParse {
                    output: output.trim().to_string(),
                }),
                None => Ok(0),
            }
        };

        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }

    /// Whether `(major, minor)` is at least the minimum. The micro level is ignored.
    pub fn satisfies(&self, minimum: MinimumVersion) -> bool {
        (self.major, self.minor) >= (minimum.major, minimum.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// A `MAJOR.MINOR` threshold such as `3.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumVersion {
    pub major: u32,
    pub minor: u32,
}

impl MinimumVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for MinimumVersion {
    fn default() -> Self {
        Self::new(3, 9)
    }
}

impl fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for MinimumVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("expected MAJOR.MINOR, got '{}'", s))?;
        let major = major
            .parse()
            .map_err(|_| format!("invalid major version in '{}'", s))?;
        let minor = minor
            .parse()
            .map_err(|_| format!("invalid minor version in '{}'", s))?;
        Ok(Self { major, minor })
    }
}

impl<'de> Deserialize<'de> for MinimumVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(raw) => raw.parse().map_err(serde::de::Error::custom),
            // 3.10 and 3.1 are the same float.
            Raw::Number(n) => Err(serde::de::Error::custom(format!(
                "minimum version {} must be quoted, e.g. \"3.10\"",
                n
            ))),
        }
    }
}
