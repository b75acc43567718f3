//! Step outcomes.
//!
//! Every provisioning step produces exactly one [`StepOutcome`]; the
//! sequencer accumulates them in execution order and the report renders
//! them. A failed step is recorded, never thrown; only the prerequisite
//! check aborts a run.

use serde::Serialize;

/// Terminal status of a provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum StepStatus {
    /// The step's artifact already exists; nothing was done.
    Skipped(String),

    /// The step performed its side effect successfully.
    Succeeded,

    /// The step's action failed; the run continues.
    FailedNonFatal(String),
}

impl StepStatus {
    pub fn is_skipped(&self) -> bool {
        matches!(self, StepStatus::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepStatus::FailedNonFatal(_))
    }
}

/// Outcome of a single provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// Step name as shown in the report.
    pub name: String,

    #[serde(flatten)]
    pub status: StepStatus,
}

impl StepOutcome {
    /// A skipped outcome with the reason shown in the report.
    pub fn skipped(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Skipped(reason.into()),
        }
    }

    /// A successful outcome.
    pub fn succeeded(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Succeeded,
        }
    }

    /// A non-fatal failure with the reason shown in the report.
    pub fn failed(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::FailedNonFatal(reason.into()),
        }
    }
}
