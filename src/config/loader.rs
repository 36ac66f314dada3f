//! Configuration file discovery and loading.

use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "flash-doctor.yml";

/// Find `flash-doctor.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into DoctorConfig.
///
/// An empty document is treated as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoctorConfig> {
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the explicit config file, or the discovered one, if any.
///
/// An explicit path must exist; a missing discovered file is not an error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<(PathBuf, DoctorConfig)>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(dir) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} in {}", CONFIG_FILE_NAME, dir.display());
                return Ok(None);
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;
    Ok(Some((path, config)))
}
