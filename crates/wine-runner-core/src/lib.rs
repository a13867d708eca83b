//! Wine Runner Core - run Windows executables through Wine and register them
//! in the desktop application menu.
//!
//! The crate is headless: front-ends collect a path from the user and hand
//! it to a [`RunnerPanel`], which drives the [`Launcher`] or the
//! [`ShortcutManager`]. [`check_dependencies`] gates startup.
//!
//! # Example
//!
//! ```rust,no_run
//! use wine_runner_core::{check_dependencies, Launcher, RunnerConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = check_dependencies();
//!     if !report.ok() {
//!         eprintln!("{}", report.message());
//!         std::process::exit(1);
//!     }
//!
//!     let config = RunnerConfig::from_env()?;
//!     Launcher::new(&config).run_exe("/home/me/Downloads/setup.exe")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dependencies;
pub mod error;
pub mod launcher;
pub mod panel;
pub mod platform;
pub mod shortcut;

// Re-export commonly used types
pub use config::{RunnerConfig, ShortcutPermissions};
pub use dependencies::{
    check_dependencies, DependencyChecker, DependencyReport, GraphicalSessionProbe, ToolkitProbe,
};
pub use error::{LaunchError, Result, RunnerError, ShortcutError};
pub use launcher::{LaunchOutput, Launcher};
pub use panel::{PanelAction, ResultSink, RunnerPanel};
pub use platform::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use shortcut::{DesktopEntry, ShortcutManager};
