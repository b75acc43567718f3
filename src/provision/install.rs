//! Dependency installation.
//!
//! Each project directory (root, server, client) is gated on its
//! `node_modules` tree. The install mode follows the lockfile: a
//! `package-lock.json` pins exact versions, so `npm ci` reproduces them;
//! without one, `npm install` resolves and installs.

use std::path::Path;

use crate::options::RunOptions;
use crate::shell::CommandRunner;

use super::gate;
use super::outcome::StepOutcome;

/// How dependencies will be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Reproducible install strictly from the lockfile (`npm ci`).
    Clean,
    /// Resolve and install without a pinned lockfile (`npm install`).
    Incremental,
}

impl InstallMode {
    fn npm_args(self) -> &'static [&'static str] {
        match self {
            InstallMode::Clean => &["ci"],
            InstallMode::Incremental => &["install"],
        }
    }
}

/// Whether to install, and how. Computed fresh per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallDecision {
    pub should_install: bool,
    pub mode: InstallMode,
}

/// Derive the install decision for a project directory.
pub fn decide(project_dir: &Path, force: bool) -> InstallDecision {
    let deps_present = gate::dir_exists(&project_dir.join("node_modules"));
    let mode = if gate::file_exists(&project_dir.join("package-lock.json")) {
        InstallMode::Clean
    } else {
        InstallMode::Incremental
    };

    InstallDecision {
        should_install: !deps_present || force,
        mode,
    }
}

/// Install dependencies for one project directory.
///
/// A missing directory and a failed install are both non-fatal: the
/// sequencer continues with the remaining steps, which are independent.
pub fn install(
    name: &str,
    project_dir: &Path,
    runner: &dyn CommandRunner,
    options: &RunOptions,
) -> StepOutcome {
    if !gate::dir_exists(project_dir) {
        return StepOutcome::failed(name, "directory missing");
    }

    let decision = decide(project_dir, options.force);
    if !decision.should_install {
        return StepOutcome::skipped(name, "dependencies present");
    }

    tracing::debug!(
        "installing in {} ({:?} mode)",
        project_dir.display(),
        decision.mode
    );

    match runner.run("npm", decision.mode.npm_args(), project_dir, false) {
        Ok(result) if result.success => StepOutcome::succeeded(name),
        Ok(result) => StepOutcome::failed(name, format!("exit code {:?}", result.exit_code)),
        Err(e) => StepOutcome::failed(name, e.to_string()),
    }
}
