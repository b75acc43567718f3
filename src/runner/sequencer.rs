//! Provisioning sequence orchestration.
//!
//! The sequence is fixed and strictly serial. Only the prerequisite check
//! can abort it; every other step records a [`StepOutcome`] and the run
//! moves on, since a failed client install must not prevent the server env
//! file from being written. The outcome vector's order always matches
//! execution order.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::manifest::{self, RootInstall};
use crate::options::RunOptions;
use crate::project::ProjectLayout;
use crate::provision::{dirs, env_file, install, schema, EnvTemplate, StepOutcome};
use crate::requirements;
use crate::shell::CommandRunner;

/// Step names as they appear in the report.
pub mod step {
    pub const ROOT_INSTALL: &str = "root install";
    pub const SERVER_INSTALL: &str = "server install";
    pub const CLIENT_INSTALL: &str = "client install";
    pub const SERVER_ENV: &str = "server env";
    pub const CLIENT_ENV: &str = "client env";
    pub const DIRECTORIES: &str = "directories";
    pub const SCHEMA: &str = "schema";
}

/// Aggregate result of one provisioning run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Per-step outcomes, in execution order.
    pub outcomes: Vec<StepOutcome>,

    /// Total duration.
    #[serde(serialize_with = "serialize_duration_secs")]
    pub duration: Duration,
}

impl RunReport {
    /// Whether any step recorded a non-fatal failure.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.status.is_failed())
    }

    /// Counts of (succeeded, skipped, failed) outcomes.
    pub fn tally(&self) -> (usize, usize, usize) {
        let mut tally = (0, 0, 0);
        for outcome in &self.outcomes {
            match &outcome.status {
                crate::provision::StepStatus::Succeeded => tally.0 += 1,
                crate::provision::StepStatus::Skipped(_) => tally.1 += 1,
                crate::provision::StepStatus::FailedNonFatal(_) => tally.2 += 1,
            }
        }
        tally
    }
}

fn serialize_duration_secs<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

/// Run the full provisioning sequence.
///
/// Returns `Err` only when a prerequisite tool is missing; in that case no
/// provisioning step has run. Non-fatal step failures are recorded in the
/// report and logged at warn.
pub fn run(
    layout: &ProjectLayout,
    runner: &dyn CommandRunner,
    options: &RunOptions,
) -> Result<RunReport> {
    let start = Instant::now();

    requirements::check(runner, layout.root())?;

    let mut outcomes = Vec::new();
    let mut record = |outcome: StepOutcome| {
        if let crate::provision::StepStatus::FailedNonFatal(ref reason) = outcome.status {
            warn!("{} failed: {}", outcome.name, reason);
        }
        outcomes.push(outcome);
    };

    // Root helper install, only when the root manifest declares something
    record(match manifest::root_install(&layout.root_manifest()) {
        RootInstall::NoManifest => StepOutcome::skipped(step::ROOT_INSTALL, "no root manifest"),
        RootInstall::NoHelperDependencies => {
            StepOutcome::skipped(step::ROOT_INSTALL, "no helper dependencies")
        }
        RootInstall::Needed => install::install(step::ROOT_INSTALL, layout.root(), runner, options),
    });

    record(install::install(
        step::SERVER_INSTALL,
        &layout.server_dir(),
        runner,
        options,
    ));
    record(install::install(
        step::CLIENT_INSTALL,
        &layout.client_dir(),
        runner,
        options,
    ));

    record(env_file::ensure(
        step::SERVER_ENV,
        &EnvTemplate::new(layout.server_env(), env_file::SERVER_ENV),
    ));
    record(env_file::ensure(
        step::CLIENT_ENV,
        &EnvTemplate::new(layout.client_env(), env_file::CLIENT_ENV),
    ));

    record(dirs::ensure_all(step::DIRECTORIES, &layout.runtime_dirs()));

    record(schema::run(step::SCHEMA, layout, runner, options));

    Ok(RunReport {
        outcomes,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::StepStatus;
    use crate::shell::RecordingRunner;
    use std::fs;
    use tempfile::TempDir;

    /// A minimal two-tier project: manifests for both tiers, no lockfiles,
    /// no root manifest, no schema.
    fn two_tier_project() -> (TempDir, ProjectLayout) {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        for dir in [layout.server_dir(), layout.client_dir()] {
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("package.json"), "{}").unwrap();
        }
        (temp, layout)
    }

    fn names(report: &RunReport) -> Vec<&str> {
        report.outcomes.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn outcomes_follow_the_fixed_order() {
        let (_temp, layout) = two_tier_project();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        assert_eq!(
            names(&report),
            vec![
                step::ROOT_INSTALL,
                step::SERVER_INSTALL,
                step::CLIENT_INSTALL,
                step::SERVER_ENV,
                step::CLIENT_ENV,
                step::DIRECTORIES,
                step::SCHEMA,
            ]
        );
    }

    #[test]
    fn first_run_provisions_everything() {
        let (_temp, layout) = two_tier_project();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        assert!(!report.has_failures());
        assert!(layout.server_env().is_file());
        assert!(layout.client_env().is_file());
        assert!(layout.runtime_dirs().iter().all(|d| d.is_dir()));
        // Prereq probes + two installs; no schema, no root manifest
        assert_eq!(
            runner.command_lines(),
            vec![
                "node --version",
                "npm --version",
                "npm install",
                "npm install"
            ]
        );
    }

    #[test]
    fn missing_prerequisite_aborts_before_any_step() {
        let (_temp, layout) = two_tier_project();
        let runner = RecordingRunner::new();
        runner.push_spawn_failure();

        let result = run(&layout, &runner, &RunOptions::default());

        assert!(result.is_err());
        assert!(!layout.server_env().exists());
        assert_eq!(runner.command_lines(), vec!["node --version"]);
    }

    #[test]
    fn second_run_skips_all_persistent_steps() {
        let (_temp, layout) = two_tier_project();
        let runner = RecordingRunner::new();
        run(&layout, &runner, &RunOptions::default()).unwrap();

        // Simulate the first run's npm installs having materialized deps
        fs::create_dir_all(layout.server_dir().join("node_modules")).unwrap();
        fs::create_dir_all(layout.client_dir().join("node_modules")).unwrap();

        let before = fs::read_to_string(layout.server_env()).unwrap();
        let second = RecordingRunner::new();
        let report = run(&layout, &second, &RunOptions::default()).unwrap();

        for outcome in &report.outcomes {
            assert!(
                outcome.status.is_skipped(),
                "{} was not skipped on second run",
                outcome.name
            );
        }
        assert_eq!(fs::read_to_string(layout.server_env()).unwrap(), before);
        // Only the prerequisite probes ran
        assert_eq!(
            second.command_lines(),
            vec!["node --version", "npm --version"]
        );
    }

    #[test]
    fn force_reinstalls_despite_present_dependencies() {
        let (_temp, layout) = two_tier_project();
        fs::create_dir_all(layout.server_dir().join("node_modules")).unwrap();
        fs::create_dir_all(layout.client_dir().join("node_modules")).unwrap();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions { force: true }).unwrap();

        let installs: Vec<_> = runner
            .command_lines()
            .into_iter()
            .filter(|c| c.starts_with("npm install") || c.starts_with("npm ci"))
            .collect();
        assert_eq!(installs.len(), 2);
        // Env files are still created once and never rewritten by force
        assert_eq!(
            report.outcomes[3].status,
            StepStatus::Succeeded // first creation
        );
    }

    #[test]
    fn force_never_overwrites_existing_env() {
        let (_temp, layout) = two_tier_project();
        fs::write(layout.server_env(), "PORT=1234\n").unwrap();
        let runner = RecordingRunner::new();

        run(&layout, &runner, &RunOptions { force: true }).unwrap();

        assert_eq!(
            fs::read_to_string(layout.server_env()).unwrap(),
            "PORT=1234\n"
        );
    }

    #[test]
    fn failed_server_install_leaves_later_steps_running() {
        let (_temp, layout) = two_tier_project();
        let runner = RecordingRunner::new();
        runner.push_exit_code(0); // node
        runner.push_exit_code(0); // npm
        runner.push_exit_code(1); // server npm install fails

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        assert!(report.has_failures());
        let server = report
            .outcomes
            .iter()
            .find(|o| o.name == step::SERVER_INSTALL)
            .unwrap();
        assert!(server.status.is_failed());
        // Everything after the failure still did its job
        assert!(layout.client_env().is_file());
        assert!(layout.runtime_dirs().iter().all(|d| d.is_dir()));
        let client_env = report
            .outcomes
            .iter()
            .find(|o| o.name == step::CLIENT_ENV)
            .unwrap();
        assert_eq!(client_env.status, StepStatus::Succeeded);
    }

    #[test]
    fn root_manifest_with_helpers_installs_at_root() {
        let (_temp, layout) = two_tier_project();
        fs::write(
            layout.root_manifest(),
            r#"{"devDependencies": {"concurrently": "^8"}}"#,
        )
        .unwrap();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        let root = report
            .outcomes
            .iter()
            .find(|o| o.name == step::ROOT_INSTALL)
            .unwrap();
        assert_eq!(root.status, StepStatus::Succeeded);
        assert_eq!(runner.invocations()[2].cwd, layout.root());
    }

    #[test]
    fn empty_root_manifest_skips_root_install() {
        let (_temp, layout) = two_tier_project();
        fs::write(layout.root_manifest(), r#"{"name": "app"}"#).unwrap();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        assert_eq!(
            report.outcomes[0].status,
            StepStatus::Skipped("no helper dependencies".to_string())
        );
    }

    #[test]
    fn schema_flow_joins_the_sequence_when_marker_present() {
        let (_temp, layout) = two_tier_project();
        fs::create_dir_all(layout.migrations_dir()).unwrap();
        fs::write(layout.schema_file(), "datasource db {}\n").unwrap();
        let runner = RecordingRunner::new();

        let report = run(&layout, &runner, &RunOptions::default()).unwrap();

        let schema = report
            .outcomes
            .iter()
            .find(|o| o.name == step::SCHEMA)
            .unwrap();
        assert_eq!(schema.status, StepStatus::Succeeded);
        assert!(runner
            .command_lines()
            .contains(&"npx prisma migrate deploy".to_string()));
    }

    #[test]
    fn tally_counts_by_status() {
        let report = RunReport {
            outcomes: vec![
                StepOutcome::succeeded("a"),
                StepOutcome::skipped("b", "present"),
                StepOutcome::skipped("c", "present"),
                StepOutcome::failed("d", "exit code 1"),
            ],
            duration: Duration::ZERO,
        };

        assert_eq!(report.tally(), (1, 2, 1));
        assert!(report.has_failures());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = RunReport {
            outcomes: vec![StepOutcome::succeeded("server env")],
            duration: Duration::from_millis(1500),
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcomes"][0]["name"], "server env");
        assert_eq!(json["outcomes"][0]["status"], "succeeded");
        assert!(json["duration"].as_f64().unwrap() > 1.0);
    }
}
