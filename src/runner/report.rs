//! Run report rendering.
//!
//! The human report is one themed line per step plus a summary; `--json`
//! swaps the whole thing for a serialized [`RunReport`]. The operator, not
//! the exit code, judges non-fatal failures, so the report is the product.

use crate::error::Result;
use crate::provision::{StepOutcome, StepStatus};
use crate::ui::Theme;

use super::sequencer::RunReport;

/// How the report is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Themed per-step lines plus summary.
    Human,
    /// Summary only.
    Quiet,
    /// Serialized JSON on stdout.
    Json,
}

/// Render the report to stdout.
pub fn render(report: &RunReport, format: ReportFormat, theme: &Theme) -> Result<()> {
    match format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report).map_err(anyhow::Error::from)?);
        }
        ReportFormat::Human => {
            println!();
            for outcome in &report.outcomes {
                println!("  {}", format_outcome(outcome, theme));
            }
            println!();
            println!("{}", summary_line(report, theme));
        }
        ReportFormat::Quiet => {
            println!("{}", summary_line(report, theme));
        }
    }
    Ok(())
}

fn format_outcome(outcome: &StepOutcome, theme: &Theme) -> String {
    match &outcome.status {
        StepStatus::Succeeded => theme.format_success(&outcome.name),
        StepStatus::Skipped(reason) => {
            theme.format_skipped(&format!("{} ({})", outcome.name, reason))
        }
        StepStatus::FailedNonFatal(reason) => {
            theme.format_error(&format!("{} — {}", outcome.name, reason))
        }
    }
}

fn summary_line(report: &RunReport, theme: &Theme) -> String {
    let (succeeded, skipped, failed) = report.tally();
    let counts = format!(
        "{} provisioned, {} skipped, {} failed in {:.1}s",
        succeeded,
        skipped,
        failed,
        report.duration.as_secs_f64()
    );

    if failed > 0 {
        theme.format_warning(&format!(
            "Setup finished with failures — {}. Review the report above.",
            counts
        ))
    } else {
        theme.format_success(&format!("Setup complete — {}.", counts))
    }
}
