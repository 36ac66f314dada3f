//! The check/status grid printed at the end of a run.

use crate::runner::CheckResult;

use super::DoctorTheme;

const NAME_HEADER: &str = "Check";
const STATUS_HEADER: &str = "Status";

/// Status cell for a check outcome.
pub fn status_label(passed: bool) -> &'static str {
    if passed {
        "✓ PASS"
    } else {
        "✗ FAIL"
    }
}

/// Render one row per result: check name, then its status.
///
/// Cells are padded on their plain text and styled afterwards, so color
/// codes never shift the columns. Widths count chars, not bytes.
pub fn render_summary_table(results: &[CheckResult], theme: &DoctorTheme) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .fold(NAME_HEADER.len(), usize::max);
    let status_width = [status_label(true), status_label(false)]
        .iter()
        .map(|s| s.chars().count())
        .fold(STATUS_HEADER.len(), usize::max);

    let edge = |left: char, mid: char, right: char| {
        theme
            .border
            .apply_to(format!(
                "{}{}{}{}{}",
                left,
                "─".repeat(name_width + 2),
                mid,
                "─".repeat(status_width + 2),
                right
            ))
            .to_string()
    };
    let row = |name: String, status: String| {
        let bar = theme.border.apply_to("│");
        format!("{bar} {} {bar} {} {bar}", name, status)
    };
    let pad = |text: &str, width: usize| format!("{:width$}", text, width = width);

    let mut lines = Vec::with_capacity(results.len() + 4);
    lines.push(edge('┌', '┬', '┐'));
    lines.push(row(
        theme.highlight.apply_to(pad(NAME_HEADER, name_width)).to_string(),
        theme.highlight.apply_to(pad(STATUS_HEADER, status_width)).to_string(),
    ));
    lines.push(edge('├', '┼', '┤'));
    for result in results {
        let style = if result.passed {
            &theme.success
        } else {
            &theme.error
        };
        lines.push(row(
            pad(&result.name, name_width),
            style
                .apply_to(pad(status_label(result.passed), status_width))
                .to_string(),
        ));
    }
    lines.push(edge('└', '┴', '┘'));
    lines.join("\n")
}
