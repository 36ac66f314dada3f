//! Check definitions and evaluation.
//!
//! A [`Check`] is a name plus a [`CheckKind`]: plain data describing what to
//! verify. Evaluating a kind against a [`Probe`] yields a [`CheckReport`], the
//! lines to show the user and, implicitly, whether the check passed. Adding a
//! check means adding an entry to the registry, not a new code path.
//!
//! # Modules
//!
//! - [`platform`] - Operating system identification
//! - [`probe`] - The side-effect seam checks run against
//! - [`registry`] - The default ordered check list and `--only` filtering

pub mod platform;
pub mod probe;
pub mod registry;

pub use probe::{MockProbe, Probe, SystemProbe};
pub use registry::{default_checks, default_libraries, filter_checks, LibraryCheck};

use crate::error::{DoctorError, Result};
use crate::python::MinimumVersion;

use platform::platform_label;

/// A named, independently runnable verification step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Name shown in headings and the summary.
    pub name: String,
    /// What the check verifies.
    pub kind: CheckKind,
}

impl Check {
    pub fn new(name: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Run the check against `probe`.
    ///
    /// Faults the check knows how to describe (a failed import, a broken smoke
    /// test, an unavailable tool, an unknown platform) become failure lines in
    /// the report. Anything else is returned as an error for the runner's
    /// boundary to handle.
    pub fn evaluate(&self, probe: &dyn Probe) -> Result<CheckReport> {
        match &self.kind {
            CheckKind::InterpreterVersion { minimum } => evaluate_interpreter(*minimum, probe),
            CheckKind::Tools { tools } => evaluate_tools(tools, probe),
            CheckKind::Library(spec) => evaluate_library(spec, probe),
            CheckKind::Platform => Ok(evaluate_platform(probe)),
        }
    }
}

/// The kinds of verification a check can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// Interpreter `(major, minor)` must be at least `minimum`.
    InterpreterVersion { minimum: MinimumVersion },
    /// Every tool must answer `--version` with exit code 0.
    Tools { tools: Vec<String> },
    /// A library must import, and pass its smoke test if it has one.
    Library(LibrarySpec),
    /// The host platform must be one of the supported identifiers.
    Platform,
}

/// A library to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySpec {
    /// Importable module name (`sklearn`).
    pub module: String,
    /// Name used in report lines (`scikit-learn`).
    pub display: String,
    /// Optional functional exercise run after a successful import.
    pub smoke: Option<SmokeTest>,
}

impl LibrarySpec {
    pub fn new(module: impl Into<String>) -> Self {
        let module = module.into();
        Self {
            display: module.clone(),
            module,
            smoke: None,
        }
    }

    pub fn display_as(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    pub fn with_smoke(mut self, script: impl Into<String>) -> Self {
        self.smoke = Some(SmokeTest {
            script: script.into(),
        });
        self
    }
}

/// A minimal functional exercise of a library beyond a bare import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeTest {
    /// Python source run with `python -c`.
    pub script: String,
}

/// One line of a check's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Progress narration.
    Note(String),
    /// Something verified.
    Success(String),
    /// Something missing or broken; any failure fails the check.
    Failure(String),
}

/// What a check found, in the order it found it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    lines: Vec<ReportLine>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&mut self, msg: impl Into<String>) {
        self.lines.push(ReportLine::Note(msg.into()));
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.lines.push(ReportLine::Success(msg.into()));
    }

    pub fn failure(&mut self, msg: impl Into<String>) {
        self.lines.push(ReportLine::Failure(msg.into()));
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// A check passes when nothing it examined failed.
    pub fn passed(&self) -> bool {
        !self
            .lines
            .iter()
            .any(|l| matches!(l, ReportLine::Failure(_)))
    }
}

fn evaluate_interpreter(minimum: MinimumVersion, probe: &dyn Probe) -> Result<CheckReport> {
    let mut report = CheckReport::new();
    report.note("Testing Python version...");

    let version = probe.interpreter_version()?;
    if version.satisfies(minimum) {
        report.success(format!("Python {} - OK", version));
    } else {
        report.failure(format!(
            "Python {} - Requires Python {}+",
            version, minimum
        ));
    }
    Ok(report)
}

fn evaluate_tools(tools: &[String], probe: &dyn Probe) -> Result<CheckReport> {
    let mut report = CheckReport::new();
    report.note("Testing system tools...");

    // Every tool is attempted even after one fails.
    for tool in tools {
        match probe.tool_version(tool) {
            Ok(version_line) => report.success(format!("{} - {}", tool, version_line)),
            Err(DoctorError::ToolUnavailable { reason, .. }) => {
                tracing::debug!("Tool {} unavailable: {}", tool, reason);
                report.failure(format!("{} - {}", tool, reason));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

fn evaluate_library(spec: &LibrarySpec, probe: &dyn Probe) -> Result<CheckReport> {
    let mut report = CheckReport::new();
    if spec.smoke.is_some() {
        report.note(format!("Testing {}...", spec.display));
    }

    match probe.import_library(&spec.module) {
        Ok(version) => report.success(format!("{} {} - OK", spec.display, version)),
        Err(DoctorError::ImportFailed { message, .. }) => {
            report.failure(format!("{} - Import failed: {}", spec.display, message));
            return Ok(report);
        }
        Err(e) => return Err(e),
    }

    if let Some(smoke) = &spec.smoke {
        match probe.smoke_test(&spec.display, &smoke.script) {
            Ok(()) => report.success(format!("{} basic functionality - OK", spec.display)),
            Err(DoctorError::ImportFailed { message, .. }) => {
                report.failure(format!("{} - Import failed: {}", spec.display, message))
            }
            Err(DoctorError::SmokeTestFailed { message, .. }) => report.failure(format!(
                "{} - Functionality test failed: {}",
                spec.display, message
            )),
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

fn evaluate_platform(probe: &dyn Probe) -> CheckReport {
    let mut report = CheckReport::new();
    report.note("Testing platform-specific packages...");

    let id = probe.platform_id().to_lowercase();
    match platform_label(&id) {
        Some(label) => report.note(format!("Testing {}-specific packages...", label)),
        None => report.failure(DoctorError::UnknownPlatform { id }.to_string()),
    }
    report
}
