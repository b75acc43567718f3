//! Provisioning steps.
//!
//! Each submodule implements one kind of idempotent side effect: existence
//! gating, env-file creation, runtime directories, dependency installation,
//! and the Prisma schema flow. Every step returns a [`StepOutcome`]; none
//! of them abort the run.

pub mod dirs;
pub mod env_file;
pub mod gate;
pub mod install;
pub mod outcome;
pub mod schema;

pub use env_file::{EnvTemplate, CLIENT_ENV, SERVER_ENV};
pub use gate::{ProvisioningTarget, TargetKind};
pub use install::{InstallDecision, InstallMode};
pub use outcome::{StepOutcome, StepStatus};
