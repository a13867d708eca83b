//! Platform-specific path utilities.
//!
//! This module provides functions to get platform-specific paths for:
//! - Application menu/shortcut directories
//! - Home-relative default locations

use crate::error::{Result, RunnerError};
use std::path::{Path, PathBuf};

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| RunnerError::Config {
        message: "Could not determine home directory".to_string(),
    })
}

/// Resolve a path relative to the user's home directory.
pub fn home_relative(relative: impl AsRef<Path>) -> Result<PathBuf> {
    Ok(home_dir()?.join(relative))
}

/// Get the per-user applications/shortcuts directory.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/applications` (XDG spec)
/// - **Other**: `<data dir>/applications`, only useful for tests and dry runs
pub fn apps_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        Ok(home_dir()?.join(".local").join("share").join("applications"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let data_dir = dirs::data_dir().ok_or_else(|| RunnerError::Config {
            message: "Could not determine app data directory".to_string(),
        })?;
        Ok(data_dir.join("applications"))
    }
}
