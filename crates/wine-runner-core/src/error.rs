//! Error types for the Wine runner.
//!
//! Each operation has its own error enum so callers can tell the failure
//! categories apart without inspecting message text. `RunnerError` wraps
//! them for code paths that touch more than one operation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from running an executable through the compatibility layer.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to start {program}: {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process exited with {}: {}", describe_code(*.code), .stderr)]
    NonZeroExit {
        /// Exit code, `None` when the child was killed by a signal.
        code: Option<i32>,
        /// Captured standard error, verbatim.
        stderr: String,
    },
}

/// Errors from creating or removing a menu shortcut.
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{command} failed: {message}")]
    RefreshFailed {
        command: String,
        /// Captured diagnostic text, or the spawn error.
        message: String,
    },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for the runner library.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("The {panel} panel does not offer {action}")]
    ActionUnavailable { panel: String, action: String },

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),
}

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl LaunchError {
    /// Stable machine-readable category.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::NotFound(_) => "not_found",
            LaunchError::SpawnFailure { .. } => "spawn_failure",
            LaunchError::NonZeroExit { .. } => "non_zero_exit",
        }
    }
}

impl ShortcutError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, message: &str, path: impl Into<PathBuf>) -> Self {
        ShortcutError::Io {
            message: message.to_string(),
            path: Some(path.into()),
            source: err,
        }
    }

    /// Stable machine-readable category.
    pub fn kind(&self) -> &'static str {
        match self {
            ShortcutError::NotFound(_) => "not_found",
            ShortcutError::RefreshFailed { .. } => "refresh_failed",
            ShortcutError::Io { .. } => "io_failure",
        }
    }
}

impl RunnerError {
    /// Stable machine-readable category, delegating to the wrapped error.
    pub fn kind(&self) -> &'static str {
        match self {
            RunnerError::Config { .. } => "config",
            RunnerError::ActionUnavailable { .. } => "action_unavailable",
            RunnerError::Launch(e) => e.kind(),
            RunnerError::Shortcut(e) => e.kind(),
        }
    }

    /// True when the target executable was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RunnerError::Launch(LaunchError::NotFound(_))
                | RunnerError::Shortcut(ShortcutError::NotFound(_))
        )
    }
}
