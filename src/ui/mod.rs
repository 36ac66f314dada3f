//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - Spinners, the summary table, and the theme
//!
//! # Example
//!
//! ```
//! use flash_doctor::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent);
//! ui.show_check_heading("NumPy");
//! ui.success("NumPy 1.26.4 - OK");
//! ```

pub mod mock;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use progress::format_duration;
pub use spinner::ProgressSpinner;
pub use table::{render_summary_table, status_label};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

use crate::runner::Summary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a passing line (`✓`).
    fn success(&mut self, msg: &str);

    /// Display a failing line (`✗`).
    fn failure(&mut self, msg: &str);

    /// Display a verbose-only detail.
    fn detail(&mut self, msg: &str);

    /// Display an error. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Write raw text to stdout in every mode (JSON, listings).
    fn emit(&mut self, text: &str);

    /// Show the opening banner: title, then `label: value` facts.
    fn show_banner(&mut self, title: &str, facts: &[(&str, String)]);

    /// Show the heading that introduces a check's lines.
    fn show_check_heading(&mut self, name: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show the end-of-run summary.
    fn show_summary(&mut self, summary: &Summary);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and erase the spinner.
    fn finish_and_clear(&mut self);
}
