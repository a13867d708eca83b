//! Centralized configuration for the Wine runner.
//!
//! Constant groups hold the fixed strings of the shortcut format and the
//! external commands. `RunnerConfig` carries the values a caller may
//! override at runtime.

use crate::error::Result;
use crate::platform;
use std::path::{Path, PathBuf};

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Wine EXE Runner";
    pub const SHORTCUT_SUFFIX: &'static str = "_wine.desktop";
    pub const MISSING_DEPENDENCIES_HEADER: &'static str =
        "The following requirements are missing:";
}

/// External commands used by the runner.
pub struct WineConfig;

impl WineConfig {
    pub const COMMAND: &'static str = "wine";
    pub const REFRESH_COMMAND: &'static str = "update-desktop-database";
}

/// Fixed fields written into every generated desktop entry.
pub struct DesktopEntryConfig;

impl DesktopEntryConfig {
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const CATEGORY: &'static str = "Wine";
    pub const ICON: &'static str = "wine";
}

/// Home-relative default locations offered by the runner panels.
pub struct PanelConfig;

impl PanelConfig {
    pub const DOWNLOADS_DIR: &'static str = "Downloads";
    pub const WINE_PROGRAMS_DIR: &'static str = ".wine/drive_c/Program Files (x86)";
}

/// Permission bits applied to generated shortcut files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortcutPermissions {
    /// Readable and executable by everyone (0o755).
    #[default]
    WorldExecutable,
    /// Owner only (0o700).
    OwnerOnly,
}

impl ShortcutPermissions {
    /// Unix mode bits for this setting.
    pub fn mode(self) -> u32 {
        match self {
            ShortcutPermissions::WorldExecutable => 0o755,
            ShortcutPermissions::OwnerOnly => 0o700,
        }
    }
}

/// Runtime configuration shared by the launcher and shortcut manager.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Compatibility-layer command used to run executables.
    pub wine_command: String,
    /// Command that refreshes the desktop's application database.
    pub refresh_command: String,
    /// Directory shortcuts are written to.
    pub apps_dir: PathBuf,
    /// Mode applied to written shortcuts.
    pub permissions: ShortcutPermissions,
}

impl RunnerConfig {
    /// Create a config writing shortcuts into `apps_dir`.
    pub fn new(apps_dir: impl AsRef<Path>) -> Self {
        Self {
            wine_command: WineConfig::COMMAND.to_string(),
            refresh_command: WineConfig::REFRESH_COMMAND.to_string(),
            apps_dir: apps_dir.as_ref().to_path_buf(),
            permissions: ShortcutPermissions::default(),
        }
    }

    /// Create a config using the platform applications directory.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(platform::apps_dir()?))
    }

    /// Set the compatibility-layer command.
    pub fn with_wine_command(mut self, command: impl Into<String>) -> Self {
        self.wine_command = command.into();
        self
    }

    /// Set the desktop database refresh command.
    pub fn with_refresh_command(mut self, command: impl Into<String>) -> Self {
        self.refresh_command = command.into();
        self
    }

    /// Set the applications directory.
    pub fn with_apps_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.apps_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the shortcut permission policy.
    pub fn with_permissions(mut self, permissions: ShortcutPermissions) -> Self {
        self.permissions = permissions;
        self
    }
}
