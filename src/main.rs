//! Groundwork CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use groundwork::cli::Cli;
use groundwork::options::RunOptions;
use groundwork::project::ProjectLayout;
use groundwork::runner::{self, ReportFormat};
use groundwork::shell::SystemRunner;
use groundwork::ui::Theme;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("groundwork=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("groundwork=info"))
    };

    // Logs go to stderr so --json output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Groundwork starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let theme = if cli.no_color || !console::Term::stdout().is_term() {
        Theme::plain()
    } else {
        Theme::new()
    };

    let format = if cli.json {
        ReportFormat::Json
    } else if cli.quiet {
        ReportFormat::Quiet
    } else {
        ReportFormat::Human
    };

    let layout = ProjectLayout::new(project_root);
    let options = RunOptions { force: cli.force };
    let system = SystemRunner::new();

    match runner::run(&layout, &system, &options) {
        Ok(report) => {
            if let Err(e) = runner::render(&report, format, &theme) {
                eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
                return ExitCode::from(1);
            }
            // Non-fatal step failures still exit 0; the report is the verdict
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
