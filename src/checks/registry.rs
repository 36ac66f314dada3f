//! The default ordered check list.

use crate::config::Settings;
use crate::error::{DoctorError, Result};
use crate::python::OPENCV_SMOKE_SCRIPT;

use super::{Check, CheckKind, LibrarySpec};

/// A library check: its check name and what to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCheck {
    pub name: String,
    pub spec: LibrarySpec,
}

impl LibraryCheck {
    fn new(name: &str, spec: LibrarySpec) -> Self {
        Self {
            name: name.to_string(),
            spec,
        }
    }
}

/// The third-party libraries a Flash installation needs, in report order.
pub fn default_libraries() -> Vec<LibraryCheck> {
    vec![
        LibraryCheck::new(
            "OpenCV",
            LibrarySpec::new("cv2")
                .display_as("OpenCV")
                .with_smoke(OPENCV_SMOKE_SCRIPT),
        ),
        LibraryCheck::new("NumPy", LibrarySpec::new("numpy")),
        LibraryCheck::new("Matplotlib", LibrarySpec::new("matplotlib")),
        LibraryCheck::new("Pandas", LibrarySpec::new("pandas")),
        LibraryCheck::new("SciPy", LibrarySpec::new("scipy")),
        LibraryCheck::new(
            "Scikit-learn",
            LibrarySpec::new("sklearn").display_as("scikit-learn"),
        ),
        LibraryCheck::new("Pygame", LibrarySpec::new("pygame")),
        LibraryCheck::new("PyOpenGL", LibrarySpec::new("OpenGL").display_as("PyOpenGL")),
        LibraryCheck::new("Numba", LibrarySpec::new("numba")),
        LibraryCheck::new("PySerial", LibrarySpec::new("serial").display_as("PySerial")),
    ]
}

/// Build the ordered check list for the given settings.
///
/// The interpreter and tool checks come first, then one check per library,
/// then the platform check.
pub fn default_checks(settings: &Settings) -> Vec<Check> {
    let mut checks = Vec::with_capacity(settings.libraries.len() + 3);

    checks.push(Check::new(
        "Python Version",
        CheckKind::InterpreterVersion {
            minimum: settings.minimum_python,
        },
    ));
    checks.push(Check::new(
        "System Tools",
        CheckKind::Tools {
            tools: settings.tools.clone(),
        },
    ));
    for library in &settings.libraries {
        checks.push(Check::new(
            library.name.clone(),
            CheckKind::Library(library.spec.clone()),
        ));
    }
    checks.push(Check::new("Platform Specific", CheckKind::Platform));

    checks
}

/// Keep only the checks named in `only` (case-insensitive), preserving
/// registry order. An empty filter keeps everything.
pub fn filter_checks(checks: Vec<Check>, only: &[String]) -> Result<Vec<Check>> {
    if only.is_empty() {
        return Ok(checks);
    }

    for wanted in only {
        if !checks.iter().any(|c| c.name.eq_ignore_ascii_case(wanted)) {
            return Err(DoctorError::UnknownCheck {
                name: wanted.clone(),
            });
        }
    }

    Ok(checks
        .into_iter()
        .filter(|c| only.iter().any(|w| c.name.eq_ignore_ascii_case(w)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(checks: &[Check]) -> Vec<&str> {
        checks.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn default_list_has_thirteen_checks_in_order() {
        let checks = default_checks(&Settings::default());
        assert_eq!(
            names(&checks),
            vec![
                "Python Version",
                "System Tools",
                "OpenCV",
                "NumPy",
                "Matplotlib",
                "Pandas",
                "SciPy",
                "Scikit-learn",
                "Pygame",
                "PyOpenGL",
                "Numba",
                "PySerial",
                "Platform Specific",
            ]
        );
    }

    #[test]
    fn only_opencv_has_a_smoke_test() {
        let with_smoke: Vec<_> = default_libraries()
            .into_iter()
            .filter(|l| l.spec.smoke.is_some())
            .map(|l| l.name)
            .collect();
        assert_eq!(with_smoke, vec!["OpenCV"]);
    }

    #[test]
    fn display_names_differ_from_modules_where_needed() {
        let libs = default_libraries();
        let find = |name: &str| libs.iter().find(|l| l.name == name).unwrap().spec.clone();
        assert_eq!(find("Scikit-learn").module, "sklearn");
        assert_eq!(find("Scikit-learn").display, "scikit-learn");
        assert_eq!(find("PyOpenGL").module, "OpenGL");
        assert_eq!(find("PySerial").module, "serial");
        assert_eq!(find("NumPy").display, "numpy");
    }

    #[test]
    fn interpreter_check_uses_configured_minimum() {
        let mut settings = Settings::default();
        settings.minimum_python = crate::python::MinimumVersion::new(3, 11);
        let checks = default_checks(&settings);
        assert_eq!(
            checks[0].kind,
            CheckKind::InterpreterVersion {
                minimum: crate::python::MinimumVersion::new(3, 11)
            }
        );
    }

    #[test]
    fn filter_preserves_registry_order() {
        let checks = default_checks(&Settings::default());
        let only = vec!["platform specific".to_string(), "NUMPY".to_string()];
        let filtered = filter_checks(checks, &only).unwrap();
        assert_eq!(names(&filtered), vec!["NumPy", "Platform Specific"]);
    }

    #[test]
    fn filter_rejects_unknown_names() {
        let checks = default_checks(&Settings::default());
        let err = filter_checks(checks, &["TensorFlow".to_string()]).unwrap_err();
        assert!(matches!(err, DoctorError::UnknownCheck { name } if name == "TensorFlow"));
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let checks = default_checks(&Settings::default());
        let total = checks.len();
        assert_eq!(filter_checks(checks, &[]).unwrap().len(), total);
    }
}
