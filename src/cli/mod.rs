//! Command-line interface.
//!
//! - [`Cli`] parses flags
//! - [`dispatch`] resolves settings and picks the command to run

pub mod args;
pub mod command;
pub mod doctor;
pub mod list;

pub use args::Cli;
pub use command::{Command, CommandResult};
pub use doctor::{DoctorCommand, REPORT_TITLE};
pub use list::ListCommand;

use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

/// Resolve settings for `cli` (looking for a config file in `dir`) and run
/// the selected command.
pub fn dispatch(cli: &Cli, dir: &Path, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    let settings = Settings::load(
        cli.config.as_deref(),
        dir,
        cli.python.as_deref(),
        cli.timeout,
    )?;
    tracing::debug!("Resolved settings: {:?}", settings);

    if cli.list {
        ListCommand::new(settings, cli.only.clone()).execute(ui)
    } else {
        DoctorCommand::new(settings, cli.only.clone(), cli.json).execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DoctorError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dispatch_lists_with_config_tools() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("flash-doctor.yml"), "tools: [git]\n").unwrap();
        let cli = Cli::try_parse_from(["flash-doctor", "--list", "--only", "System Tools"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatch(&cli, temp.path(), &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.emitted()[0].ends_with("tools: git"));
    }

    #[test]
    fn dispatch_reports_bad_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("flash-doctor.yml"), "tool_timeout_secs: 0\n").unwrap();
        let cli = Cli::try_parse_from(["flash-doctor", "--list"]).unwrap();
        let mut ui = MockUI::new();

        let err = dispatch(&cli, temp.path(), &mut ui).unwrap_err();

        assert!(matches!(err, DoctorError::ConfigValidationError { .. }));
    }
}
