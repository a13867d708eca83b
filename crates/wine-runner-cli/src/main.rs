//! Wine Runner - command-line front-end.
//!
//! Checks the required tools once at startup, then runs Windows executables
//! through Wine or registers menu shortcuts for them.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use wine_runner_core::config::AppConfig;
use wine_runner_core::platform::{self, SystemCommandRunner};
use wine_runner_core::{check_dependencies, DependencyReport};

#[derive(Parser, Debug)]
#[command(name = "wine-runner")]
#[command(about = "Run Windows executables through Wine and add them to the application menu")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Skip the startup dependency check
    #[arg(long, global = true)]
    skip_checks: bool,

    /// Requirements file to open when dependencies are missing
    #[arg(long, global = true)]
    requirements: Option<PathBuf>,

    /// Compatibility-layer command
    #[arg(long, global = true, default_value = "wine")]
    wine: String,

    /// Command that refreshes the desktop application database
    #[arg(long, global = true, default_value = "update-desktop-database")]
    refresh_command: String,

    /// Applications directory for shortcuts (defaults to ~/.local/share/applications)
    #[arg(long, global = true)]
    apps_dir: Option<PathBuf>,

    /// Make shortcuts readable and executable by the owner only
    #[arg(long, global = true)]
    owner_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report missing dependencies
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run an executable through Wine
    Run {
        /// Executable path (defaults to the panel's default location)
        path: Option<String>,

        /// Panel whose default location is used
        #[arg(long, value_enum, default_value_t = PanelChoice::Downloads)]
        panel: PanelChoice,
    },
    /// Create an application-menu shortcut for an executable
    Shortcut {
        /// Executable path (defaults to the Wine programs directory)
        path: Option<String>,
    },
    /// Remove the application-menu shortcut for an executable
    RemoveShortcut {
        /// Executable path the shortcut was created for
        path: PathBuf,
    },
    /// Print each panel's default location
    Defaults {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PanelChoice {
    Downloads,
    WineApps,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting {} on {}", AppConfig::APP_NAME, platform::current_platform());

    if !args.skip_checks && !matches!(args.command, Command::Check { .. }) {
        let report = check_dependencies();
        if !report.ok() {
            dependency_failure(&report, args.requirements.as_deref());
            return Ok(ExitCode::FAILURE);
        }
    }

    let config = || {
        commands::build_config(
            &args.wine,
            &args.refresh_command,
            args.apps_dir.as_deref(),
            args.owner_only,
        )
    };

    match &args.command {
        Command::Check { json } => {
            let report = check_dependencies();
            commands::print_report(&report, *json)?;
            Ok(exit_for(&report))
        }
        Command::Run { path, panel } => commands::run(&config()?, *panel, path.as_deref()),
        Command::Shortcut { path } => commands::shortcut(&config()?, path.as_deref()),
        Command::RemoveShortcut { path } => commands::remove_shortcut(&config()?, path),
        Command::Defaults { json } => commands::defaults(*json),
    }
}

fn exit_for(report: &DependencyReport) -> ExitCode {
    if report.ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Report missing dependencies and optionally open the requirements file.
fn dependency_failure(report: &DependencyReport, requirements: Option<&std::path::Path>) {
    let message = report.message();
    error!("Dependency check failed");
    eprintln!("{}", message);

    if let Some(path) = requirements {
        if let Err(e) = platform::open_with_default_app(&SystemCommandRunner, path) {
            error!("Could not open requirements file: {}", e);
        }
    }
}
