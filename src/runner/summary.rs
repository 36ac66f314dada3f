//! Run outcomes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::{CheckReport, ReportLine};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    /// Failure lines, for machine-readable output.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
            failures: Vec::new(),
        }
    }

    /// Result for a check whose evaluation did not complete.
    pub fn faulted(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            failures: vec![message.into()],
        }
    }

    pub fn from_report(name: impl Into<String>, report: &CheckReport) -> Self {
        let failures = report
            .lines()
            .iter()
            .filter_map(|line| match line {
                ReportLine::Failure(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect();
        Self {
            name: name.into(),
            passed: report.passed(),
            failures,
        }
    }
}

/// Ordered results of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub results: Vec<CheckResult>,
}

impl Summary {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit code: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// The `--json` document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub checked_at: DateTime<Utc>,
    pub platform: String,
    pub python: String,
    pub passed: usize,
    pub total: usize,
    pub success: bool,
    pub results: Vec<CheckResult>,
}

impl JsonReport {
    pub fn new(summary: &Summary, platform: impl Into<String>, python: impl Into<String>) -> Self {
        Self {
            checked_at: Utc::now(),
            platform: platform.into(),
            python: python.into(),
            passed: summary.passed(),
            total: summary.total(),
            success: summary.all_passed(),
            results: summary.results.clone(),
        }
    }
}
