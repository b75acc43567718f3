//! CLI argument definitions.
//!
//! One entry point, no subcommands: `groundwork [flags]` provisions the
//! project in the current (or `--project`) directory. Unknown arguments
//! get clap's usage error and a non-zero exit.

use clap::Parser;
use std::path::PathBuf;

/// Groundwork - idempotent local development environment bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Re-run all install/migrate steps unconditionally
    #[arg(short, long)]
    pub force: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Summary only, no per-step lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_force_short_and_long() {
        let cli = Cli::parse_from(["groundwork", "-f"]);
        assert!(cli.force);

        let cli = Cli::parse_from(["groundwork", "--force"]);
        assert!(cli.force);
    }

    #[test]
    fn defaults_are_off() {
        let cli = Cli::parse_from(["groundwork"]);

        assert!(!cli.force);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(!cli.no_color);
        assert!(!cli.debug);
        assert!(cli.project.is_none());
    }

    #[test]
    fn parses_project_path() {
        let cli = Cli::parse_from(["groundwork", "--project", "/work/app"]);
        assert_eq!(cli.project, Some(PathBuf::from("/work/app")));
    }

    #[test]
    fn rejects_unknown_argument() {
        let result = Cli::try_parse_from(["groundwork", "--definitely-unknown"]);
        assert!(result.is_err());
    }
}
