//! Check execution.
//!
//! Checks run one at a time, in order. Each evaluation sits behind an error
//! boundary: an `Err` or a panic marks that check failed and the run moves on,
//! so a run always yields exactly one result per check. A panic inside a
//! check is logged at debug level instead of printed by the default hook.

pub mod summary;

pub use summary::{CheckResult, JsonReport, Summary};

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use tracing::{debug, warn};

use crate::checks::{Check, CheckReport, Probe, ReportLine};
use crate::ui::{format_duration, UserInterface};

thread_local! {
    static IN_CHECK: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Wrap the current panic hook so panics on a thread that is evaluating a
/// check are logged rather than printed. Other panics reach the old hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_CHECK.with(Cell::get) {
                debug!("check panicked: {}", info);
            } else {
                previous(info);
            }
        }));
    });
}

/// Runs checks against a probe and reports through a UI.
pub struct CheckRunner<'a> {
    probe: &'a dyn Probe,
}

impl<'a> CheckRunner<'a> {
    pub fn new(probe: &'a dyn Probe) -> Self {
        Self { probe }
    }

    /// Run every check in order and collect the results.
    pub fn run(&self, checks: &[Check], ui: &mut dyn UserInterface) -> Summary {
        install_panic_hook();
        let results = checks.iter().map(|check| self.run_one(check, ui)).collect();
        Summary::new(results)
    }

    fn run_one(&self, check: &Check, ui: &mut dyn UserInterface) -> CheckResult {
        ui.show_check_heading(&check.name);

        let mut spinner = ui.start_spinner(&format!("Checking {}...", check.name));
        let start = Instant::now();
        IN_CHECK.with(|flag| flag.set(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.evaluate(self.probe)));
        IN_CHECK.with(|flag| flag.set(false));
        let elapsed = start.elapsed();
        spinner.finish_and_clear();

        let result = match outcome {
            Ok(Ok(report)) => {
                render_report(&report, ui);
                CheckResult::from_report(&check.name, &report)
            }
            Ok(Err(e)) => {
                warn!(check = %check.name, error = %e, "check returned an error");
                let msg = format!("{} - Check failed with error: {}", check.name, e);
                ui.failure(&msg);
                CheckResult::faulted(&check.name, msg)
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                warn!(check = %check.name, panic = %reason, "check panicked");
                let msg = format!("{} - Check failed with error: panicked: {}", check.name, reason);
                ui.failure(&msg);
                CheckResult::faulted(&check.name, msg)
            }
        };

        ui.detail(&format!("{} took {}", check.name, format_duration(elapsed)));
        debug!(
            check = %check.name,
            passed = result.passed,
            elapsed_ms = elapsed.as_millis() as u64,
            "check finished"
        );
        result
    }
}

fn render_report(report: &CheckReport, ui: &mut dyn UserInterface) {
    for line in report.lines() {
        match line {
            ReportLine::Note(msg) => ui.message(msg),
            ReportLine::Success(msg) => ui.success(msg),
            ReportLine::Failure(msg) => ui.failure(msg),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
