//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here:
//! - `paths` - Home-relative and XDG directories
//! - `permissions` - File mode handling for shortcut files
//! - `process` - Running external commands and opening files
//!
//! Linux is the target platform; the other branches keep the crate
//! building elsewhere.

pub mod paths;
pub mod permissions;
pub mod process;

pub use paths::{apps_dir, home_relative};
pub use permissions::{is_regular_file, set_mode};
pub use process::{open_with_default_app, CommandOutput, CommandRunner, SystemCommandRunner};

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}
