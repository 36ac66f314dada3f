//! Integration tests for config module public API.

use flash_doctor::checks::default_checks;
use flash_doctor::config::{load_config, parse_config, validate, Settings, CONFIG_FILE_NAME};
use flash_doctor::DoctorError;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn no_config_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    assert!(load_config(None, temp.path()).unwrap().is_none());

    let settings = Settings::load(None, temp.path(), None, None).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tool_timeout, Duration::from_secs(10));
    assert_eq!(settings.import_timeout, Duration::from_secs(60));
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
python: /opt/python3.12/bin/python3
minimum_python: "3.10"
tool_timeout_secs: 5
import_timeout_secs: 120
tools: [git, make]
libraries:
  - module: cv2
  - module: torch
    name: PyTorch
"#,
    )
    .unwrap();

    let settings = Settings::load(None, temp.path(), None, Some(2)).unwrap();
    assert_eq!(settings.python, "/opt/python3.12/bin/python3");
    assert_eq!(settings.minimum_python.to_string(), "3.10");
    assert_eq!(settings.tool_timeout, Duration::from_secs(2));
    assert_eq!(settings.import_timeout, Duration::from_secs(120));

    let names: Vec<String> = default_checks(&settings)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Python Version",
            "System Tools",
            "OpenCV",
            "PyTorch",
            "Platform Specific"
        ]
    );
}

#[test]
fn flag_overrides_config_python() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "python: python3.9\n").unwrap();

    let settings = Settings::load(None, temp.path(), Some("python3.13"), None).unwrap();
    assert_eq!(settings.python, "python3.13");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse_config("pyhton: python3\n", Path::new("flash-doctor.yml")).unwrap_err();
    assert!(matches!(err, DoctorError::ConfigParseError { .. }));
}

#[test]
fn validation_reports_every_problem() {
    let mut settings = Settings::default();
    settings.python = String::new();
    settings.tool_timeout = Duration::ZERO;

    let err = validate(&settings).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("python"));
    assert!(message.contains("timeout"));
}
