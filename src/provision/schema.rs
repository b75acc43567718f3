//! Prisma schema flow.
//!
//! Presence of `server/prisma/schema.prisma` switches the whole flow on.
//! The flow is a short state machine:
//!
//! 1. No schema file → skip, zero external invocations
//! 2. Probe `npx prisma --version`; unavailable → skip
//! 3. `prisma generate`; failure is logged, migration still gets its turn
//! 4. Migrations directory absent and no `--force` → skip migration
//! 5. `prisma migrate deploy`; on failure fall back to
//!    `prisma migrate dev --name init`
//!
//! The deploy→dev-init fallback is inherited from the original setup flow:
//! a fresh environment has no migrations to deploy, so the tool bootstraps
//! one; an environment with existing migrations gets the non-mutating
//! deploy first. Deploy can also fail for other reasons (schema drift) and
//! the fallback does not distinguish them.

use std::path::Path;

use crate::options::RunOptions;
use crate::project::ProjectLayout;
use crate::shell::{probe, CommandRunner};

use super::gate;
use super::outcome::StepOutcome;

/// What to do when a planned command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Log and move on to the next command.
    Continue,
    /// The next command is this one's fallback: run it only on failure,
    /// skip it on success.
    Fallback,
}

/// One command in a best-effort chain.
#[derive(Debug)]
pub struct PlannedCommand {
    pub label: &'static str,
    pub args: &'static [&'static str],
    pub on_failure: OnFailure,
}

/// Evaluate a command chain, returning per-command success flags.
///
/// `None` marks a command that was skipped because its predecessor's
/// fallback clause did not trigger.
pub fn run_chain(
    chain: &[PlannedCommand],
    runner: &dyn CommandRunner,
    cwd: &Path,
) -> Vec<Option<bool>> {
    let mut results = Vec::with_capacity(chain.len());
    let mut skip_next = false;

    for command in chain {
        if skip_next {
            results.push(None);
            skip_next = false;
            continue;
        }

        let ok = runner
            .run("npx", command.args, cwd, false)
            .map(|r| r.success)
            .unwrap_or(false);
        if !ok {
            tracing::warn!("{} failed", command.label);
        }
        results.push(Some(ok));

        if command.on_failure == OnFailure::Fallback && ok {
            skip_next = true;
        }
    }

    results
}

/// The generate + migrate chain. `migrate dev --name init` is the
/// fallback for `migrate deploy`.
const MIGRATE_CHAIN: &[PlannedCommand] = &[
    PlannedCommand {
        label: "prisma migrate deploy",
        args: &["prisma", "migrate", "deploy"],
        on_failure: OnFailure::Fallback,
    },
    PlannedCommand {
        label: "prisma migrate dev --name init",
        args: &["prisma", "migrate", "dev", "--name", "init"],
        on_failure: OnFailure::Continue,
    },
];

/// Run the schema flow for the project.
pub fn run(
    name: &str,
    layout: &ProjectLayout,
    runner: &dyn CommandRunner,
    options: &RunOptions,
) -> StepOutcome {
    if !gate::file_exists(&layout.schema_file()) {
        return StepOutcome::skipped(name, "no schema");
    }

    let server = layout.server_dir();

    if !probe(runner, "npx", &["prisma", "--version"], &server) {
        return StepOutcome::skipped(name, "prisma unavailable");
    }

    // Generate and migrate have independent failure domains: a broken
    // generator must not block applying migrations.
    let generate_ok = runner
        .run("npx", &["prisma", "generate"], &server, false)
        .map(|r| r.success)
        .unwrap_or(false);
    if !generate_ok {
        tracing::warn!("prisma generate failed");
    }

    if !gate::dir_exists(&layout.migrations_dir()) && !options.force {
        return StepOutcome::skipped(name, "no migrations");
    }

    let results = run_chain(MIGRATE_CHAIN, runner, &server);
    let migrated = results.iter().flatten().any(|ok| *ok);

    if migrated {
        StepOutcome::succeeded(name)
    } else {
        StepOutcome::failed(name, "migrate deploy and dev init both failed")
    }
}
