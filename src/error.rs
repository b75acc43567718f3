//! Error types for Groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `PrerequisiteMissing` is the one fatal error: it aborts the run before
//!   any provisioning step and maps to a non-zero process exit
//! - Everything else surfaces as a non-fatal step outcome in the sequencer's
//!   report; these variants exist for the component boundaries
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// A required prerequisite tool is not installed. Fatal.
    #[error("Required tool '{tool}' not found. Install it and re-run.")]
    PrerequisiteMissing { tool: String },

    /// An external command could not be spawned or exited abnormally.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
