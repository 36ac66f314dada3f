//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// flash-doctor - Check that a Flash development environment is installed.
#[derive(Debug, Parser)]
#[command(name = "flash-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ./flash-doctor.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Python interpreter to diagnose
    #[arg(long, env = "FLASH_DOCTOR_PYTHON")]
    pub python: Option<String>,

    /// Seconds to wait for each tool and interpreter query
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Run only the named checks (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub only: Vec<String>,

    /// List the checks in run order and exit
    #[arg(long)]
    pub list: bool,

    /// Print a JSON report instead of the human-readable one
    #[arg(long, conflicts_with = "list")]
    pub json: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode implied by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}
