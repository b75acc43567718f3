//! External command execution.
//!
//! Provisioning steps never shell out through `$SHELL`; every external tool
//! (npm, npx, node) is spawned directly with explicit arguments and an
//! explicit working directory. The [`CommandRunner`] trait is the seam that
//! lets tests substitute a [`RecordingRunner`] for the real thing, so the
//! sequencer's decisions can be asserted without touching the network or a
//! real package manager.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{GroundworkError, Result};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Result for a process that exited with the given code.
    pub fn from_code(code: Option<i32>) -> Self {
        Self {
            exit_code: code,
            success: code == Some(0),
        }
    }
}

/// Executes an external program with arguments in a working directory.
///
/// `quiet` suppresses the child's stdout/stderr; otherwise the child
/// inherits the parent's stdio so the user sees installer output live.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path, quiet: bool) -> Result<CommandResult>;
}

/// Runs commands against the real system via `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path, quiet: bool) -> Result<CommandResult> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.current_dir(cwd);

        if quiet {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
            cmd.stdin(Stdio::null());
        }

        let command_display = format_command(program, args);
        tracing::debug!("running `{}` in {}", command_display, cwd.display());

        let status = cmd.status().map_err(|_| GroundworkError::CommandFailed {
            command: command_display,
            code: None,
        })?;

        Ok(CommandResult::from_code(status.code()))
    }
}

/// A recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub quiet: bool,
}

impl Invocation {
    /// The invocation as a single display string, e.g. `npm ci`.
    pub fn command_line(&self) -> String {
        format_command(&self.program, &self.args.iter().map(String::as_str).collect::<Vec<_>>())
    }
}

/// Test double that records invocations and returns scripted exit codes.
///
/// Responses are consumed in invocation order; once the script is
/// exhausted, every further command succeeds. A scripted `None` simulates
/// a spawn failure (program not on PATH).
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    responses: RefCell<Vec<Option<i32>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exit code for the next unscripted invocation.
    pub fn push_exit_code(&self, code: i32) {
        self.responses.borrow_mut().push(Some(code));
    }

    /// Queue a spawn failure for the next unscripted invocation.
    pub fn push_spawn_failure(&self) {
        self.responses.borrow_mut().push(None);
    }

    /// All invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// The recorded command lines, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path, quiet: bool) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
            quiet,
        });

        let mut responses = self.responses.borrow_mut();
        let scripted = if responses.is_empty() {
            Some(0)
        } else {
            responses.remove(0)
        };

        match scripted {
            Some(code) => Ok(CommandResult::from_code(Some(code))),
            None => Err(GroundworkError::CommandFailed {
                command: format_command(program, args),
                code: None,
            }),
        }
    }
}

/// Probe whether a tool answers a quiet invocation.
///
/// Spawn failures and non-zero exits both read as "unavailable"; the
/// caller decides whether that is fatal (prerequisites) or a skip (prisma).
pub fn probe(runner: &dyn CommandRunner, program: &str, args: &[&str], cwd: &Path) -> bool {
    runner
        .run(program, args, cwd, true)
        .map(|r| r.success)
        .unwrap_or(false)
}

fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
