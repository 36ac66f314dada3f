//! `--list`: show the checks that would run.

use crate::checks::{default_checks, filter_checks, Check, CheckKind};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// Prints each check's name and what it verifies, in run order.
pub struct ListCommand {
    settings: Settings,
    only: Vec<String>,
}

impl ListCommand {
    pub fn new(settings: Settings, only: Vec<String>) -> Self {
        Self { settings, only }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checks = filter_checks(default_checks(&self.settings), &self.only)?;
        let width = checks.iter().map(|c| c.name.len()).max().unwrap_or(0);

        for check in &checks {
            ui.emit(&format!(
                "{:width$}  {}",
                check.name,
                describe(check),
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}

fn describe(check: &Check) -> String {
    match &check.kind {
        CheckKind::InterpreterVersion { minimum } => format!("python >= {}", minimum),
        CheckKind::Tools { tools } => format!("tools: {}", tools.join(", ")),
        CheckKind::Library(spec) if spec.smoke.is_some() => {
            format!("import {} + smoke test", spec.module)
        }
        CheckKind::Library(spec) => format!("import {}", spec.module),
        CheckKind::Platform => "platform support".to_string(),
    }
}
