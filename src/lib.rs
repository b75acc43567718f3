//! Groundwork - idempotent local development environment bootstrapper.
//!
//! Groundwork replaces an ad-hoc `bin/setup` shell script for a two-tier
//! (server + client) Node web application: it verifies the toolchain,
//! installs dependencies per tier, seeds default `.env` files, ensures the
//! server's runtime directories, and drives Prisma's generate/migrate flow
//! when a schema is present. Every step is gated on an existence check, so
//! repeated runs are safe and report `Skipped` instead of redoing work.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Root package manifest inspection
//! - [`options`] - Process-wide run options
//! - [`project`] - Fixed project layout paths
//! - [`provision`] - The individual idempotent provisioning steps
//! - [`requirements`] - Fatal prerequisite tool checks
//! - [`runner`] - Fixed-order sequencing and report rendering
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output styling
//!
//! # Example
//!
//! ```no_run
//! use groundwork::options::RunOptions;
//! use groundwork::project::ProjectLayout;
//! use groundwork::shell::SystemRunner;
//!
//! let layout = ProjectLayout::new(".");
//! let report = groundwork::runner::run(&layout, &SystemRunner::new(), &RunOptions::default())?;
//! for outcome in &report.outcomes {
//!     println!("{}: {:?}", outcome.name, outcome.status);
//! }
//! # Ok::<(), groundwork::GroundworkError>(())
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod options;
pub mod project;
pub mod provision;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{GroundworkError, Result};
