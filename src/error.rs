//! Error types for flash-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Faults raised while probing the environment (missing library, broken
//!   smoke test, unavailable tool, unknown platform) are caught at the check
//!   boundary and turned into a failed result, never propagated further
//! - Configuration and usage errors surface from `main` with exit code 1
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why an external tool could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFault {
    /// The tool ran but exited non-zero.
    CommandFailed,
    /// The executable was absent or did not finish in time.
    NotFoundOrTimeout,
}

impl fmt::Display for ToolFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandFailed => write!(f, "Command failed"),
            Self::NotFoundOrTimeout => write!(f, "Not found or timeout"),
        }
    }
}

/// Core error type for flash-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// A library could not be imported by the interpreter.
    #[error("Import of '{module}' failed: {message}")]
    ImportFailed { module: String, message: String },

    /// Importing a library raised something other than `ImportError`.
    #[error("Import of '{module}' crashed: {message}")]
    ImportCrashed { module: String, message: String },

    /// A library imported but its smoke test raised.
    #[error("{library} functionality test failed: {message}")]
    SmokeTestFailed { library: String, message: String },

    /// An external tool is missing, timed out, or exited non-zero.
    #[error("Tool '{tool}' unavailable: {reason}")]
    ToolUnavailable { tool: String, reason: ToolFault },

    /// The operating system identifier is not one of the supported ones.
    #[error("Unknown platform: {id}")]
    UnknownPlatform { id: String },

    /// The configured interpreter could not be started or misbehaved.
    #[error("Python interpreter '{command}' unavailable: {reason}")]
    InterpreterUnavailable { command: String, reason: String },

    /// The interpreter's version banner did not contain a version.
    #[error("Could not parse Python version from: {output:?}")]
    VersionParse { output: String },

    /// A child process could not be spawned.
    #[error("Failed to start '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// A child process exited non-zero where success was expected.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A child process exceeded its time limit and was killed.
    #[error("Command timed out after {}s: {command}", .limit.as_secs_f64())]
    Timeout { command: String, limit: Duration },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// `--only` named a check that is not registered.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flash-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
