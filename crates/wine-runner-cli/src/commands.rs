//! Subcommand handlers.
//!
//! Each handler builds the panel the command belongs to and prints the
//! panel's status lines to stdout.

use crate::PanelChoice;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use wine_runner_core::{
    DependencyReport, Launcher, PanelAction, ResultSink, RunnerConfig, RunnerPanel,
    ShortcutManager, ShortcutPermissions,
};

/// Prints status lines as they arrive.
struct StdoutSink;

impl ResultSink for StdoutSink {
    fn report(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    ok: bool,
    missing: &'a [String],
    message: String,
}

#[derive(Serialize)]
struct PanelDefaults {
    title: String,
    default_path: String,
    shortcuts: bool,
}

/// Build the runtime config from command-line overrides.
pub fn build_config(
    wine: &str,
    refresh_command: &str,
    apps_dir: Option<&Path>,
    owner_only: bool,
) -> Result<RunnerConfig> {
    let config = match apps_dir {
        Some(dir) => RunnerConfig::new(dir),
        None => RunnerConfig::from_env().context("Could not resolve the applications directory")?,
    };

    let permissions = if owner_only {
        ShortcutPermissions::OwnerOnly
    } else {
        ShortcutPermissions::WorldExecutable
    };

    Ok(config
        .with_wine_command(wine)
        .with_refresh_command(refresh_command)
        .with_permissions(permissions))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn print_report(report: &DependencyReport, json: bool) -> Result<()> {
    if json {
        let view = ReportView {
            ok: report.ok(),
            missing: report.missing(),
            message: report.message(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if report.ok() {
        println!("All requirements are installed");
    } else {
        println!("{}", report.message());
    }
    Ok(())
}

pub fn run(config: &RunnerConfig, panel: PanelChoice, path: Option<&str>) -> Result<ExitCode> {
    let mut panel = match panel {
        PanelChoice::Downloads => RunnerPanel::downloads(StdoutSink)?,
        PanelChoice::WineApps => RunnerPanel::wine_programs(StdoutSink)?,
    };
    info!("Using panel: {}", panel.title());

    let launcher = Launcher::new(config);
    Ok(exit_code(panel.run(&launcher, path).is_ok()))
}

pub fn shortcut(config: &RunnerConfig, path: Option<&str>) -> Result<ExitCode> {
    let mut panel = RunnerPanel::wine_programs(StdoutSink)?;
    let manager = ShortcutManager::new(config.clone());
    Ok(exit_code(panel.create_shortcut(&manager, path).is_ok()))
}

pub fn remove_shortcut(config: &RunnerConfig, path: &Path) -> Result<ExitCode> {
    let manager = ShortcutManager::new(config.clone());
    let shortcut_path = manager.shortcut_path(path);

    if manager.remove_shortcut(path)? {
        println!("Removed {}", shortcut_path.display());
    } else {
        println!("No shortcut at {}", shortcut_path.display());
    }
    Ok(ExitCode::SUCCESS)
}

pub fn defaults(json: bool) -> Result<ExitCode> {
    let panels = [
        RunnerPanel::downloads(StdoutSink)?,
        RunnerPanel::wine_programs(StdoutSink)?,
    ];

    let views: Vec<PanelDefaults> = panels
        .iter()
        .map(|panel| PanelDefaults {
            title: panel.title().to_string(),
            default_path: panel.default_path().display().to_string(),
            shortcuts: panel.allows(PanelAction::CreateShortcut),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for view in &views {
            println!("{}: {}", view.title, view.default_path);
        }
    }
    Ok(ExitCode::SUCCESS)
}
