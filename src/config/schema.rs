//! Configuration schema definitions.
//!
//! These structs map to the optional `flash-doctor.yml` file. Every field is
//! optional; anything left out keeps its built-in default.

use serde::Deserialize;

use crate::python::MinimumVersion;

/// Root structure of `flash-doctor.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctorConfig {
    /// Interpreter command or path (e.g. `python3.11`, `/opt/conda/bin/python`)
    pub python: Option<String>,

    /// Minimum interpreter version as a quoted `"MAJOR.MINOR"` string
    pub minimum_python: Option<MinimumVersion>,

    /// Time limit for each tool and interpreter query, in seconds
    pub tool_timeout_secs: Option<u64>,

    /// Time limit for each import and smoke test, in seconds
    pub import_timeout_secs: Option<u64>,

    /// Tools that must answer `--version`
    pub tools: Option<Vec<String>>,

    /// Libraries that must import; replaces the built-in list
    pub libraries: Option<Vec<LibraryConfig>>,
}

/// One library entry.
///
/// An entry whose `module` matches a built-in library inherits that
/// library's check name, display name, and smoke test unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Importable module name
    pub module: String,

    /// Check name used in headings, the summary, and `--only`
    #[serde(default)]
    pub name: Option<String>,

    /// Name used in report lines
    #[serde(default)]
    pub display: Option<String>,

    /// Python source run after a successful import
    #[serde(default)]
    pub smoke: Option<String>,
}
