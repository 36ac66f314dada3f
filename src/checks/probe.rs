//! The side-effecting queries checks are evaluated against.
//!
//! [`Probe`] is the single seam between the check definitions and the host.
//! [`SystemProbe`] answers from real child processes; tests use
//! [`MockProbe`] to script answers and inject faults.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{DoctorError, Result, ToolFault};
use crate::python::{PythonInterpreter, PythonVersion};
use crate::shell::{execute, CommandOptions};

use super::platform::current_platform_id;

/// Everything a check may ask of the environment.
pub trait Probe {
    /// Version of the diagnosed interpreter.
    fn interpreter_version(&self) -> Result<PythonVersion>;

    /// Location of the diagnosed interpreter.
    fn interpreter_path(&self) -> Result<String>;

    /// First line of `<tool> --version`.
    ///
    /// Fails with [`DoctorError::ToolUnavailable`] when the tool is missing,
    /// times out, or exits non-zero.
    fn tool_version(&self, tool: &str) -> Result<String>;

    /// Import a library and return its declared version (`Unknown` if none).
    fn import_library(&self, module: &str) -> Result<String>;

    /// Run a smoke-test script for an already importable library.
    fn smoke_test(&self, library: &str, script: &str) -> Result<()>;

    /// Lowercase operating system identifier (`darwin`, `linux`, ...).
    fn platform_id(&self) -> String;
}

/// Probe backed by the real interpreter, PATH, and host OS.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    python: PythonInterpreter,
    tool_timeout: Duration,
}

impl SystemProbe {
    pub fn new(python: PythonInterpreter, tool_timeout: Duration) -> Self {
        Self {
            python,
            tool_timeout,
        }
    }

    pub fn python(&self) -> &PythonInterpreter {
        &self.python
    }
}

impl Probe for SystemProbe {
    fn interpreter_version(&self) -> Result<PythonVersion> {
        self.python.version()
    }

    fn interpreter_path(&self) -> Result<String> {
        self.python.executable()
    }

    fn tool_version(&self, tool: &str) -> Result<String> {
        let options = CommandOptions::captured(self.tool_timeout);
        match execute(tool, &["--version"], &options) {
            Ok(result) if result.success => Ok(result.first_stdout_line().to_string()),
            Ok(_) => Err(DoctorError::ToolUnavailable {
                tool: tool.to_string(),
                reason: ToolFault::CommandFailed,
            }),
            Err(DoctorError::SpawnFailed { .. } | DoctorError::Timeout { .. }) => {
                Err(DoctorError::ToolUnavailable {
                    tool: tool.to_string(),
                    reason: ToolFault::NotFoundOrTimeout,
                })
            }
            Err(e) => Err(e),
        }
    }

    fn import_library(&self, module: &str) -> Result<String> {
        self.python.import(module)
    }

    fn smoke_test(&self, library: &str, script: &str) -> Result<()> {
        self.python.run_snippet(library, script)
    }

    fn platform_id(&self) -> String {
        current_platform_id()
    }
}

/// A scripted answer for [`MockProbe`].
#[derive(Debug, Clone)]
enum Scripted<T> {
    Answer(T),
    Fault(fn(&str) -> DoctorError),
    Panic(&'static str),
}

impl<T: Clone> Scripted<T> {
    fn resolve(&self, subject: &str) -> Result<T> {
        match self {
            Self::Answer(v) => Ok(v.clone()),
            Self::Fault(make) => Err(make(subject)),
            Self::Panic(msg) => panic!("{}", msg),
        }
    }
}

/// Probe with pre-determined answers, for tests and dry runs.
///
/// Anything not scripted behaves like a pristine environment: Python 3.11.0,
/// every tool and library present, Linux host.
///
/// # Example
///
/// ```
/// use flash_doctor::checks::{MockProbe, Probe};
/// use flash_doctor::DoctorError;
///
/// let probe = MockProbe::new().with_missing_library("numba");
/// assert!(probe.import_library("numpy").is_ok());
/// assert!(matches!(
///     probe.import_library("numba"),
///     Err(DoctorError::ImportFailed { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct MockProbe {
    version: Scripted<PythonVersion>,
    path: String,
    tools: HashMap<String, Scripted<String>>,
    libraries: HashMap<String, Scripted<String>>,
    smoke: HashMap<String, Scripted<()>>,
    platform: String,
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProbe {
    pub fn new() -> Self {
        Self {
            version: Scripted::Answer(PythonVersion::new(3, 11, 0)),
            path: "/usr/bin/python3".to_string(),
            tools: HashMap::new(),
            libraries: HashMap::new(),
            smoke: HashMap::new(),
            platform: "linux".to_string(),
        }
    }

    pub fn with_version(mut self, major: u32, minor: u32, micro: u32) -> Self {
        self.version = Scripted::Answer(PythonVersion::new(major, minor, micro));
        self
    }

    /// Make the interpreter itself unreachable.
    pub fn with_missing_interpreter(mut self) -> Self {
        self.version = Scripted::Fault(|cmd| DoctorError::InterpreterUnavailable {
            command: cmd.to_string(),
            reason: "No such file or directory".to_string(),
        });
        self
    }

    pub fn with_tool(mut self, tool: &str, version_line: &str) -> Self {
        self.tools
            .insert(tool.to_string(), Scripted::Answer(version_line.to_string()));
        self
    }

    pub fn with_missing_tool(mut self, tool: &str) -> Self {
        self.tools.insert(
            tool.to_string(),
            Scripted::Fault(|t| DoctorError::ToolUnavailable {
                tool: t.to_string(),
                reason: ToolFault::NotFoundOrTimeout,
            }),
        );
        self
    }

    pub fn with_failing_tool(mut self, tool: &str) -> Self {
        self.tools.insert(
            tool.to_string(),
            Scripted::Fault(|t| DoctorError::ToolUnavailable {
                tool: t.to_string(),
                reason: ToolFault::CommandFailed,
            }),
        );
        self
    }

    pub fn with_library(mut self, module: &str, version: &str) -> Self {
        self.libraries
            .insert(module.to_string(), Scripted::Answer(version.to_string()));
        self
    }

    pub fn with_missing_library(mut self, module: &str) -> Self {
        self.libraries.insert(
            module.to_string(),
            Scripted::Fault(|m| DoctorError::ImportFailed {
                module: m.to_string(),
                message: format!("No module named '{}'", m),
            }),
        );
        self
    }

    /// Make importing `module` raise something other than `ImportError`.
    pub fn with_broken_library(mut self, module: &str) -> Self {
        self.libraries.insert(
            module.to_string(),
            Scripted::Fault(|m| DoctorError::ImportCrashed {
                module: m.to_string(),
                message: "RuntimeError: CUDA driver too old".to_string(),
            }),
        );
        self
    }

    /// Make importing `module` panic inside the probe.
    pub fn with_panicking_library(mut self, module: &str) -> Self {
        self.libraries
            .insert(module.to_string(), Scripted::Panic("probe exploded"));
        self
    }

    pub fn with_failing_smoke(mut self, library: &str) -> Self {
        self.smoke.insert(
            library.to_string(),
            Scripted::Fault(|l| DoctorError::SmokeTestFailed {
                library: l.to_string(),
                message: "cv2.error: (-215:Assertion failed)".to_string(),
            }),
        );
        self
    }

    /// Make the smoke test for `library` miss one of its own imports.
    pub fn with_smoke_missing_dependency(mut self, library: &str) -> Self {
        self.smoke.insert(
            library.to_string(),
            Scripted::Fault(|l| DoctorError::ImportFailed {
                module: l.to_string(),
                message: "No module named 'numpy'".to_string(),
            }),
        );
        self
    }

    pub fn with_platform(mut self, id: &str) -> Self {
        self.platform = id.to_string();
        self
    }
}

impl Probe for MockProbe {
    fn interpreter_version(&self) -> Result<PythonVersion> {
        self.version.resolve("python3")
    }

    fn interpreter_path(&self) -> Result<String> {
        Ok(self.path.clone())
    }

    fn tool_version(&self, tool: &str) -> Result<String> {
        match self.tools.get(tool) {
            Some(scripted) => scripted.resolve(tool),
            None => Ok(format!("{} version 1.0.0", tool)),
        }
    }

    fn import_library(&self, module: &str) -> Result<String> {
        match self.libraries.get(module) {
            Some(scripted) => scripted.resolve(module),
            None => Ok("1.0.0".to_string()),
        }
    }

    fn smoke_test(&self, library: &str, _script: &str) -> Result<()> {
        match self.smoke.get(library) {
            Some(scripted) => scripted.resolve(library),
            None => Ok(()),
        }
    }

    fn platform_id(&self) -> String {
        self.platform.clone()
    }
}
