//! External command execution.

pub mod command;

pub use command::{probe, CommandResult, CommandRunner, Invocation, RecordingRunner, SystemRunner};
