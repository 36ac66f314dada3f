//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use flash_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_check_heading("NumPy");
//! ui.success("NumPy 1.26.4 - OK");
//!
//! assert_eq!(ui.headings(), ["NumPy"]);
//! assert!(ui.has_success("NumPy 1.26.4"));
//! ```

use crate::runner::Summary;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Records every call regardless of output mode, so tests can assert on
/// what the runner asked to show.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    details: Vec<String>,
    errors: Vec<String>,
    emitted: Vec<String>,
    banners: Vec<(String, Vec<(String, String)>)>,
    headings: Vec<String>,
    spinners: Vec<String>,
    summaries: Vec<Summary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Banners shown, as (title, [(label, value)]).
    pub fn banners(&self) -> &[(String, Vec<(String, String)>)] {
        &self.banners
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Check if any success line contains the given text.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|s| s.contains(text))
    }

    /// Check if any failure line contains the given text.
    pub fn has_failure(&self, text: &str) -> bool {
        self.failures.iter().any(|s| s.contains(text))
    }

    /// Check if any plain message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|s| s.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }

    fn show_banner(&mut self, title: &str, facts: &[(&str, String)]) {
        let facts = facts
            .iter()
            .map(|(label, value)| (label.to_string(), value.clone()))
            .collect();
        self.banners.push((title.to_string(), facts));
    }

    fn show_check_heading(&mut self, name: &str) {
        self.headings.push(name.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.summaries.push(summary.clone());
    }
}

/// Spinner that draws nothing.
#[derive(Debug)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {}
}
