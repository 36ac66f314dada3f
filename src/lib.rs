//! flash-doctor - Verify a Flash development environment.
//!
//! flash-doctor checks that the Python interpreter, the system tools, and
//! the scientific libraries a Flash installation relies on are present and
//! working, then prints a pass/fail summary.
//!
//! # Modules
//!
//! - [`checks`] - Check definitions, the default registry, and the probe seam
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Querying a Python interpreter through child processes
//! - [`runner`] - Sequential check execution and summaries
//! - [`shell`] - Command execution with timeouts
//! - [`ui`] - Spinners, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use flash_doctor::checks::{default_checks, MockProbe};
//! use flash_doctor::config::Settings;
//! use flash_doctor::runner::CheckRunner;
//! use flash_doctor::ui::MockUI;
//!
//! let probe = MockProbe::new().with_missing_library("pygame");
//! let checks = default_checks(&Settings::default());
//! let mut ui = MockUI::new();
//!
//! let summary = CheckRunner::new(&probe).run(&checks, &mut ui);
//! assert_eq!(summary.passed(), summary.total() - 1);
//! assert_eq!(summary.exit_code(), 1);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
