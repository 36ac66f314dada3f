//! Settings validation rules.
//!
//! - The interpreter command must be non-empty
//! - Timeouts must be positive
//! - At least one tool, none blank
//! - Library modules must be non-empty
//! - Check names must be unique (case-insensitive), since `--only` selects by name

use std::collections::HashSet;

use crate::config::settings::Settings;
use crate::error::{DoctorError, Result};

/// Names the registry always uses for its non-library checks.
const BUILTIN_CHECK_NAMES: [&str; 3] = ["Python Version", "System Tools", "Platform Specific"];

/// Validate settings and return every problem found.
///
/// Collects all errors rather than stopping at the first one, so a user
/// can fix multiple issues at once.
pub fn validate_settings(settings: &Settings) -> Vec<String> {
    let mut errors = Vec::new();

    if settings.python.trim().is_empty() {
        errors.push("python must not be empty".to_string());
    }
    if settings.tool_timeout.is_zero() {
        errors.push("tool_timeout_secs must be greater than 0".to_string());
    }
    if settings.import_timeout.is_zero() {
        errors.push("import_timeout_secs must be greater than 0".to_string());
    }

    if settings.tools.is_empty() {
        errors.push("tools must list at least one tool".to_string());
    }
    if settings.tools.iter().any(|t| t.trim().is_empty()) {
        errors.push("tools must not contain blank entries".to_string());
    }

    let mut seen: HashSet<String> = BUILTIN_CHECK_NAMES
        .iter()
        .map(|n| n.to_lowercase())
        .collect();
    for library in &settings.libraries {
        if library.spec.module.trim().is_empty() {
            errors.push(format!("library '{}' has an empty module", library.name));
        }
        if !seen.insert(library.name.to_lowercase()) {
            errors.push(format!("duplicate check name '{}'", library.name));
        }
    }

    errors
}

/// Validate settings, failing with every problem joined into one message.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DoctorError::ConfigValidationError {
            message: errors.join("; "),
        })
    }
}
