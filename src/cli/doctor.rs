//! The default command: banner, every check, summary.

use tracing::debug;

use crate::checks::platform::{current_machine, system_name};
use crate::checks::{default_checks, filter_checks, Probe};
use crate::config::Settings;
use crate::error::{DoctorError, Result};
use crate::runner::{CheckRunner, JsonReport};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// Title printed at the top of the report.
pub const REPORT_TITLE: &str = "Flash Installation Test";

/// Runs the checks and reports the outcome.
pub struct DoctorCommand {
    settings: Settings,
    only: Vec<String>,
    json: bool,
}

impl DoctorCommand {
    pub fn new(settings: Settings, only: Vec<String>, json: bool) -> Self {
        Self {
            settings,
            only,
            json,
        }
    }

    /// Run against an explicit probe.
    pub fn run_with_probe(
        &self,
        probe: &dyn Probe,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let checks = filter_checks(default_checks(&self.settings), &self.only)?;

        let platform = format!("{} {}", system_name(&probe.platform_id()), current_machine());
        let python = match probe.interpreter_path() {
            Ok(path) => path,
            Err(e) => {
                debug!("Interpreter path unavailable: {}", e);
                format!("{} (unavailable)", self.settings.python)
            }
        };

        ui.show_banner(
            REPORT_TITLE,
            &[("Platform", platform.clone()), ("Python", python.clone())],
        );

        let summary = CheckRunner::new(probe).run(&checks, ui);
        ui.show_summary(&summary);

        if self.json {
            let report = JsonReport::new(&summary, platform, python);
            let text = serde_json::to_string_pretty(&report)
                .map_err(|e| DoctorError::Other(e.into()))?;
            ui.emit(&text);
        }

        if summary.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(summary.exit_code()))
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.settings.probe();
        self.run_with_probe(&probe, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::MockProbe;
    use crate::ui::{MockUI, OutputMode};

    fn command(only: &[&str], json: bool) -> DoctorCommand {
        DoctorCommand::new(
            Settings::default(),
            only.iter().map(|s| s.to_string()).collect(),
            json,
        )
    }

    #[test]
    fn banner_names_platform_and_interpreter() {
        let mut ui = MockUI::new();
        command(&[], false)
            .run_with_probe(&MockProbe::new(), &mut ui)
            .unwrap();

        let (title, facts) = &ui.banners()[0];
        assert_eq!(title, REPORT_TITLE);
        assert_eq!(facts[0].0, "Platform");
        assert!(facts[0].1.starts_with("Linux "));
        assert_eq!(facts[1], ("Python".to_string(), "/usr/bin/python3".to_string()));
    }

    #[test]
    fn all_passing_returns_success() {
        let mut ui = MockUI::new();
        let result = command(&[], false)
            .run_with_probe(&MockProbe::new(), &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::success());
        let summary = &ui.summaries()[0];
        assert_eq!(summary.total(), 13);
        assert_eq!(summary.passed(), 13);
    }

    #[test]
    fn any_failure_returns_exit_one() {
        let mut ui = MockUI::new();
        let probe = MockProbe::new().with_version(3, 8, 10);
        let result = command(&[], false).run_with_probe(&probe, &mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_failure("Python 3.8.10 - Requires Python 3.9+"));
    }

    #[test]
    fn only_narrows_the_run() {
        let mut ui = MockUI::new();
        let probe = MockProbe::new().with_missing_library("numba");
        let result = command(&["numpy", "platform specific"], false)
            .run_with_probe(&probe, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.headings(), ["NumPy", "Platform Specific"]);
    }

    #[test]
    fn unknown_only_name_is_an_error() {
        let mut ui = MockUI::new();
        let err = command(&["Tensorflow"], false)
            .run_with_probe(&MockProbe::new(), &mut ui)
            .unwrap_err();

        assert!(matches!(err, DoctorError::UnknownCheck { .. }));
        assert!(ui.headings().is_empty());
    }

    #[test]
    fn json_report_is_emitted() {
        let mut ui = MockUI::with_mode(OutputMode::Silent);
        let probe = MockProbe::new().with_platform("plan9");
        let result = command(&[], true).run_with_probe(&probe, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.emitted().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(value["total"], 13);
        assert_eq!(value["passed"], 12);
        assert_eq!(value["success"], false);
        assert_eq!(value["python"], "/usr/bin/python3");
        assert_eq!(value["results"][12]["name"], "Platform Specific");
        assert_eq!(value["results"][12]["failures"][0], "Unknown platform: plan9");
    }
}
