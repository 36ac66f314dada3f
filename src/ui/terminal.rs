//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::runner::Summary;

use super::{
    render_summary_table, should_use_colors, DoctorTheme, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Terminal UI implementation.
///
/// The report goes to stdout; errors go to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: DoctorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn failure(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "  {}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn show_banner(&mut self, title: &str, facts: &[(&str, String)]) {
        if !self.mode.shows_status() {
            return;
        }
        writeln!(self.term, "{}", self.theme.rule()).ok();
        writeln!(self.term, "{}", self.theme.header.apply_to(title)).ok();
        writeln!(self.term, "{}", self.theme.rule()).ok();
        for (label, value) in facts {
            writeln!(self.term, "{}: {}", label, value).ok();
        }
        writeln!(self.term, "{}", self.theme.rule()).ok();
    }

    fn show_check_heading(&mut self, name: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}", self.theme.format_heading(name)).ok();
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_summary(&mut self, summary: &Summary) {
        if !self.mode.shows_summary() {
            return;
        }

        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.rule()).ok();
        writeln!(self.term, "{}", self.theme.highlight.apply_to("Test Summary")).ok();
        writeln!(self.term, "{}", self.theme.rule()).ok();

        writeln!(
            self.term,
            "{}",
            render_summary_table(&summary.results, &self.theme)
        )
        .ok();

        writeln!(self.term, "{}", self.theme.rule()).ok();
        writeln!(
            self.term,
            "Results: {}/{} tests passed",
            summary.passed(),
            summary.total()
        )
        .ok();

        if summary.all_passed() {
            writeln!(
                self.term,
                "{}",
                self.theme
                    .format_success("All tests passed! Installation is successful.")
            )
            .ok();
        } else {
            writeln!(
                self.term,
                "{}",
                self.theme
                    .format_warning("Some tests failed. Check the output above for details.")
            )
            .ok();
        }
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn silent_ui_writes_nothing_for_status() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        ui.message("hidden");
        ui.success("hidden");
        ui.failure("hidden");
        ui.show_check_heading("hidden");
        ui.show_summary(&Summary::default());
    }
}
