//! Startup dependency checks.
//!
//! Resolves the fixed set of required command-line tools on the search path
//! and asks a [`ToolkitProbe`] whether the front-end toolkit is usable.
//! Absence is reported, never raised.

use crate::config::AppConfig;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A required command and the name shown to the user when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyRequirement {
    pub command: &'static str,
    pub display_name: &'static str,
}

/// Commands that must be resolvable on the search path.
pub const REQUIRED_COMMANDS: [DependencyRequirement; 4] = [
    DependencyRequirement {
        command: "wine",
        display_name: "Wine",
    },
    DependencyRequirement {
        command: "python3",
        display_name: "Python 3",
    },
    DependencyRequirement {
        command: "pip",
        display_name: "Pip",
    },
    DependencyRequirement {
        command: "update-desktop-database",
        display_name: "Update Desktop Database",
    },
];

/// Checks whether the GUI toolkit the front-end needs is usable.
pub trait ToolkitProbe {
    /// Name reported when the toolkit is unavailable.
    fn display_name(&self) -> &str;

    fn is_available(&self) -> bool;
}

/// Treats the toolkit as loadable when a graphical session is reachable.
#[derive(Debug, Clone, Default)]
pub struct GraphicalSessionProbe {
    wayland_display: Option<OsString>,
    display: Option<OsString>,
}

impl GraphicalSessionProbe {
    /// Read `WAYLAND_DISPLAY` and `DISPLAY` from the process environment.
    pub fn from_env() -> Self {
        Self {
            wayland_display: std::env::var_os("WAYLAND_DISPLAY"),
            display: std::env::var_os("DISPLAY"),
        }
    }

    /// Build a probe from explicit values.
    pub fn with_vars(wayland_display: Option<&str>, display: Option<&str>) -> Self {
        Self {
            wayland_display: wayland_display.map(OsString::from),
            display: display.map(OsString::from),
        }
    }
}

impl ToolkitProbe for GraphicalSessionProbe {
    fn display_name(&self) -> &str {
        "Graphical session"
    }

    fn is_available(&self) -> bool {
        [&self.wayland_display, &self.display]
            .iter()
            .any(|var| var.as_ref().is_some_and(|v| !v.is_empty()))
    }
}

/// Outcome of a dependency check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    /// Display names of failed checks, in check order.
    missing: Vec<String>,
}

impl DependencyReport {
    /// True iff every check passed.
    pub fn ok(&self) -> bool {
        self.missing.is_empty()
    }

    /// Display names of the failed checks.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Header plus one missing name per line; empty when everything passed.
    pub fn message(&self) -> String {
        if self.ok() {
            return String::new();
        }
        let mut lines = Vec::with_capacity(self.missing.len() + 1);
        lines.push(AppConfig::MISSING_DEPENDENCIES_HEADER);
        lines.extend(self.missing.iter().map(String::as_str));
        lines.join("\n")
    }

    /// The `(ok, message)` pair.
    pub fn into_parts(self) -> (bool, String) {
        (self.ok(), self.message())
    }
}

/// Runs the fixed dependency checks against a search path and toolkit probe.
pub struct DependencyChecker {
    search_path: Option<OsString>,
    cwd: PathBuf,
    toolkit: Box<dyn ToolkitProbe>,
}

impl DependencyChecker {
    /// Checker using the process `PATH` and the graphical-session probe.
    pub fn new() -> Self {
        Self {
            search_path: None,
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            toolkit: Box::new(GraphicalSessionProbe::from_env()),
        }
    }

    /// Resolve commands against `path` instead of the process `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Replace the toolkit probe.
    pub fn with_toolkit(mut self, toolkit: impl ToolkitProbe + 'static) -> Self {
        self.toolkit = Box::new(toolkit);
        self
    }

    fn command_available(&self, command: &str) -> bool {
        let found = match &self.search_path {
            Some(path) => which::which_in(command, Some(path), &self.cwd),
            None => which::which(command),
        };

        match found {
            Ok(resolved) => {
                debug!("Found {} at {}", command, resolved.display());
                true
            }
            Err(_) => false,
        }
    }

    /// Run all five checks.
    pub fn check(&self) -> DependencyReport {
        let mut missing = Vec::new();

        for requirement in REQUIRED_COMMANDS {
            if !self.command_available(requirement.command) {
                warn!("Missing dependency: {}", requirement.display_name);
                missing.push(requirement.display_name.to_string());
            }
        }

        if !self.toolkit.is_available() {
            warn!("Missing dependency: {}", self.toolkit.display_name());
            missing.push(self.toolkit.display_name().to_string());
        }

        if missing.is_empty() {
            debug!("All dependencies present");
        }

        DependencyReport { missing }
    }
}

impl Default for DependencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the environment with default settings.
pub fn check_dependencies() -> DependencyReport {
    DependencyChecker::new().check()
}
