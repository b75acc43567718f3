//! Prerequisite tool checks.
//!
//! Everything downstream shells out to the Node toolchain, so a missing
//! node or npm makes the whole run pointless. This is the one check whose
//! failure is fatal: the run aborts before any provisioning step.

use std::path::Path;

use crate::error::{GroundworkError, Result};
use crate::shell::{probe, CommandRunner};

/// Tools that must answer a version probe before provisioning starts.
const REQUIRED_TOOLS: &[&str] = &["node", "npm"];

/// Verify every required tool is invocable. Fatal on the first miss.
pub fn check(runner: &dyn CommandRunner, cwd: &Path) -> Result<()> {
    for tool in REQUIRED_TOOLS {
        if !probe(runner, tool, &["--version"], cwd) {
            return Err(GroundworkError::PrerequisiteMissing {
                tool: (*tool).to_string(),
            });
        }
        tracing::debug!("{} available", tool);
    }
    Ok(())
}
