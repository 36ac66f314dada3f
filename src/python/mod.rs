//! Querying a Python interpreter from the outside.
//!
//! Every question about the Python environment (its version, where it
//! lives, whether a library imports) is answered by running the configured
//! interpreter as a short-lived child process with captured output and a
//! time limit.
//!
//! # Modules
//!
//! - [`version`] - Version parsing and threshold comparison

pub mod version;

pub use version::{MinimumVersion, PythonVersion};

use std::time::Duration;

use crate::error::{DoctorError, Result};
use crate::shell::{display_command, execute, CommandOptions, CommandResult};

/// Exit code the import script uses when `import` raises `ImportError`.
pub const IMPORT_FAILED_EXIT: i32 = 3;

/// Imports `sys.argv[1]` and prints its `__version__`, or `Unknown`.
pub const IMPORT_SCRIPT: &str = r#"import importlib, sys
try:
    module = importlib.import_module(sys.argv[1])
except ImportError as exc:
    sys.stderr.write(str(exc) + "\n")
    sys.exit(3)
print(getattr(module, "__version__", "Unknown"))
"#;

/// Converts a blank 100x100 BGR image to grayscale. A missing dependency
/// exits with [`IMPORT_FAILED_EXIT`] rather than failing the conversion.
pub const OPENCV_SMOKE_SCRIPT: &str = r#"import sys
try:
    import cv2
    import numpy as np
except ImportError as exc:
    sys.stderr.write(str(exc) + "\n")
    sys.exit(3)
img = np.zeros((100, 100, 3), dtype=np.uint8)
gray = cv2.cvtColor(img, cv2.COLOR_BGR2GRAY)
assert gray.shape == (100, 100)
"#;

const EXECUTABLE_SCRIPT: &str = "import sys; print(sys.executable)";

/// Default interpreter command for the current platform.
pub fn default_python_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// A Python interpreter reachable by command name or path.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    command: String,
    query_timeout: Duration,
    import_timeout: Duration,
}

impl PythonInterpreter {
    /// `query_timeout` bounds `--version` and path queries; `import_timeout`
    /// bounds imports and smoke tests.
    pub fn new(command: impl Into<String>, query_timeout: Duration, import_timeout: Duration) -> Self {
        Self {
            command: command.into(),
            query_timeout,
            import_timeout,
        }
    }

    /// The command used to start the interpreter.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run `python --version` and parse the result.
    ///
    /// Interpreters before 3.4 print the banner on stderr, so that stream is
    /// used when stdout is empty.
    pub fn version(&self) -> Result<PythonVersion> {
        let result = self.invoke(&["--version"], self.query_timeout)?;
        if !result.success {
            return Err(DoctorError::InterpreterUnavailable {
                command: self.command.clone(),
                reason: format!("--version exited with code {:?}", result.exit_code),
            });
        }
        let banner = if result.stdout.trim().is_empty() {
            &result.stderr
        } else {
            &result.stdout
        };
        PythonVersion::parse(banner)
    }

    /// Absolute path of the interpreter binary (`sys.executable`).
    pub fn executable(&self) -> Result<String> {
        let result = self.invoke(&["-c", EXECUTABLE_SCRIPT], self.query_timeout)?;
        if !result.success {
            return Err(DoctorError::CommandFailed {
                command: display_command(&self.command, &["-c", EXECUTABLE_SCRIPT]),
                code: result.exit_code,
            });
        }
        Ok(result.first_stdout_line().to_string())
    }

    /// Import `module` and return its declared version, or `Unknown`.
    pub fn import(&self, module: &str) -> Result<String> {
        let result = self.invoke(&["-c", IMPORT_SCRIPT, module], self.import_timeout)?;

        if result.success {
            let version = result.first_stdout_line();
            return Ok(if version.is_empty() {
                "Unknown".to_string()
            } else {
                version.to_string()
            });
        }

        if result.exit_code == Some(IMPORT_FAILED_EXIT) {
            return Err(DoctorError::ImportFailed {
                module: module.to_string(),
                message: result
                    .last_stderr_line()
                    .unwrap_or("ImportError")
                    .to_string(),
            });
        }

        Err(DoctorError::ImportCrashed {
            module: module.to_string(),
            message: failure_message(&result),
        })
    }

    /// Run a smoke-test snippet.
    ///
    /// Exiting with [`IMPORT_FAILED_EXIT`] means a dependency of the snippet
    /// is missing; any other non-zero exit is a functionality fault.
    pub fn run_snippet(&self, library: &str, script: &str) -> Result<()> {
        let result = self.invoke(&["-c", script], self.import_timeout)?;
        if result.success {
            return Ok(());
        }
        let message = failure_message(&result);
        if result.exit_code == Some(IMPORT_FAILED_EXIT) {
            return Err(DoctorError::ImportFailed {
                module: library.to_string(),
                message,
            });
        }
        Err(DoctorError::SmokeTestFailed {
            library: library.to_string(),
            message,
        })
    }

    fn invoke(&self, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        execute(&self.command, args, &CommandOptions::captured(timeout)).map_err(|e| match e {
            DoctorError::SpawnFailed { message, .. } => DoctorError::InterpreterUnavailable {
                command: self.command.clone(),
                reason: message,
            },
            other => other,
        })
    }
}

/// The exception line a failed script left on stderr, or its exit code.
fn failure_message(result: &CommandResult) -> String {
    result
        .last_stderr_line()
        .map(str::to_string)
        .unwrap_or_else(|| format!("exited with code {:?}", result.exit_code))
}
