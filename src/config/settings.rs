//! Effective settings for a run.
//!
//! Layers, later overriding earlier:
//! 1. Built-in defaults
//! 2. `flash-doctor.yml` (discovered or `--config`)
//! 3. Command-line flags (`--python` also reads `FLASH_DOCTOR_PYTHON`)

use std::path::Path;
use std::time::Duration;

use crate::checks::registry::{default_libraries, LibraryCheck};
use crate::checks::{LibrarySpec, SmokeTest, SystemProbe};
use crate::config::loader::load_config;
use crate::config::schema::{DoctorConfig, LibraryConfig};
use crate::config::validator::validate;
use crate::error::Result;
use crate::python::{default_python_command, MinimumVersion, PythonInterpreter};

/// Default time limit for tool and interpreter queries.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time limit for imports and smoke tests.
pub const DEFAULT_IMPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub python: String,
    pub minimum_python: MinimumVersion,
    pub tool_timeout: Duration,
    pub import_timeout: Duration,
    pub tools: Vec<String>,
    pub libraries: Vec<LibraryCheck>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python_command().to_string(),
            minimum_python: MinimumVersion::default(),
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
            import_timeout: DEFAULT_IMPORT_TIMEOUT,
            tools: default_tools(),
            libraries: default_libraries(),
        }
    }
}

/// `cmake`, `git`, and the platform's Python command.
pub fn default_tools() -> Vec<String> {
    vec![
        "cmake".to_string(),
        "git".to_string(),
        default_python_command().to_string(),
    ]
}

impl Settings {
    /// Resolve settings from defaults, the config file, and flag overrides,
    /// then validate them.
    pub fn load(
        config_path: Option<&Path>,
        dir: &Path,
        python: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let mut settings = Self::default();
        if let Some((path, config)) = load_config(config_path, dir)? {
            tracing::debug!("Applying config from {}", path.display());
            settings.apply_config(&config);
        }
        settings.apply_overrides(python, timeout_secs);
        validate(&settings)?;
        Ok(settings)
    }

    /// Overlay the values present in a config file.
    pub fn apply_config(&mut self, config: &DoctorConfig) {
        if let Some(python) = &config.python {
            self.python = python.clone();
        }
        if let Some(minimum) = config.minimum_python {
            self.minimum_python = minimum;
        }
        if let Some(secs) = config.tool_timeout_secs {
            self.tool_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = config.import_timeout_secs {
            self.import_timeout = Duration::from_secs(secs);
        }
        if let Some(tools) = &config.tools {
            self.tools = tools.clone();
        }
        if let Some(libraries) = &config.libraries {
            self.libraries = libraries.iter().map(resolve_library).collect();
        }
    }

    /// Overlay command-line flags.
    pub fn apply_overrides(&mut self, python: Option<&str>, timeout_secs: Option<u64>) {
        if let Some(python) = python {
            self.python = python.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.tool_timeout = Duration::from_secs(secs);
        }
    }

    /// The interpreter these settings point at.
    pub fn interpreter(&self) -> PythonInterpreter {
        PythonInterpreter::new(self.python.clone(), self.tool_timeout, self.import_timeout)
    }

    /// A probe of the real environment using these settings.
    pub fn probe(&self) -> SystemProbe {
        SystemProbe::new(self.interpreter(), self.tool_timeout)
    }
}

/// Turn a config entry into a library check, inheriting from the built-in
/// entry with the same module.
fn resolve_library(entry: &LibraryConfig) -> LibraryCheck {
    let builtin = default_libraries()
        .into_iter()
        .find(|l| l.spec.module == entry.module);

    let display = entry
        .display
        .clone()
        .or_else(|| builtin.as_ref().map(|b| b.spec.display.clone()))
        .unwrap_or_else(|| entry.module.clone());
    let name = entry
        .name
        .clone()
        .or_else(|| builtin.as_ref().map(|b| b.name.clone()))
        .unwrap_or_else(|| display.clone());
    let smoke = match &entry.smoke {
        Some(script) => Some(SmokeTest {
            script: script.clone(),
        }),
        None => builtin.and_then(|b| b.spec.smoke),
    };

    LibraryCheck {
        name,
        spec: LibrarySpec {
            module: entry.module.clone(),
            display,
            smoke,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::CONFIG_FILE_NAME;
    use crate::error::DoctorError;
    use std::fs;
    use tempfile::TempDir;

    fn entry(module: &str) -> LibraryConfig {
        LibraryConfig {
            module: module.to_string(),
            name: None,
            display: None,
            smoke: None,
        }
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tool_timeout, Duration::from_secs(10));
        assert_eq!(settings.minimum_python, MinimumVersion::new(3, 9));
        assert_eq!(settings.tools.len(), 3);
        assert_eq!(settings.libraries.len(), 10);
    }

    #[test]
    fn config_values_override_defaults() {
        let mut settings = Settings::default();
        settings.apply_config(&DoctorConfig {
            python: Some("python3.12".to_string()),
            minimum_python: Some(MinimumVersion::new(3, 10)),
            tool_timeout_secs: Some(3),
            import_timeout_secs: Some(90),
            tools: Some(vec!["git".to_string()]),
            libraries: Some(vec![entry("numpy")]),
        });
        assert_eq!(settings.python, "python3.12");
        assert_eq!(settings.minimum_python, MinimumVersion::new(3, 10));
        assert_eq!(settings.tool_timeout, Duration::from_secs(3));
        assert_eq!(settings.import_timeout, Duration::from_secs(90));
        assert_eq!(settings.tools, vec!["git"]);
        assert_eq!(settings.libraries.len(), 1);
    }

    #[test]
    fn flags_override_config() {
        let mut settings = Settings::default();
        settings.apply_config(&DoctorConfig {
            python: Some("python3.12".to_string()),
            tool_timeout_secs: Some(3),
            ..Default::default()
        });
        settings.apply_overrides(Some("/opt/python"), Some(20));
        assert_eq!(settings.python, "/opt/python");
        assert_eq!(settings.tool_timeout, Duration::from_secs(20));
    }

    #[test]
    fn builtin_module_inherits_name_display_and_smoke() {
        let lib = resolve_library(&entry("cv2"));
        assert_eq!(lib.name, "OpenCV");
        assert_eq!(lib.spec.display, "OpenCV");
        assert!(lib.spec.smoke.is_some());

        let lib = resolve_library(&entry("sklearn"));
        assert_eq!(lib.name, "Scikit-learn");
        assert_eq!(lib.spec.display, "scikit-learn");
    }

    #[test]
    fn unknown_module_uses_module_name() {
        let lib = resolve_library(&entry("torch"));
        assert_eq!(lib.name, "torch");
        assert_eq!(lib.spec.display, "torch");
        assert!(lib.spec.smoke.is_none());
    }

    #[test]
    fn unknown_module_name_follows_display() {
        let lib = resolve_library(&LibraryConfig {
            display: Some("PyTorch".to_string()),
            ..entry("torch")
        });
        assert_eq!(lib.name, "PyTorch");
        assert_eq!(lib.spec.display, "PyTorch");
        assert_eq!(lib.spec.module, "torch");
    }

    #[test]
    fn explicit_fields_win_over_builtin() {
        let lib = resolve_library(&LibraryConfig {
            module: "cv2".to_string(),
            name: Some("OpenCV headless".to_string()),
            display: Some("cv2".to_string()),
            smoke: Some("import cv2".to_string()),
        });
        assert_eq!(lib.name, "OpenCV headless");
        assert_eq!(lib.spec.display, "cv2");
        assert_eq!(lib.spec.smoke.unwrap().script, "import cv2");
    }

    #[test]
    fn load_without_config_is_default() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(None, temp.path(), None, None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_reads_discovered_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "python: python3.11\ntools: [git]\n",
        )
        .unwrap();
        let settings = Settings::load(None, temp.path(), None, None).unwrap();
        assert_eq!(settings.python, "python3.11");
        assert_eq!(settings.tools, vec!["git"]);
    }

    #[test]
    fn load_validates_result() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "tool_timeout_secs: 0\n").unwrap();
        let err = Settings::load(None, temp.path(), None, None).unwrap_err();
        assert!(matches!(err, DoctorError::ConfigValidationError { .. }));
    }

    #[test]
    fn probe_uses_configured_interpreter() {
        let mut settings = Settings::default();
        settings.python = "python3.12".to_string();
        assert_eq!(settings.probe().python().command(), "python3.12");
    }
}
