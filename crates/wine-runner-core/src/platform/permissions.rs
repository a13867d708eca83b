//! Platform-specific file permission handling.

use std::io;
use std::path::Path;
use tracing::debug;

/// Apply Unix mode bits to a file.
///
/// # Platform Behavior
/// - **Linux/macOS**: Sets the given mode
/// - **Windows**: No-op (executability is determined by file extension)
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path)?.permissions();
        permissions.set_mode(mode);
        std::fs::set_permissions(path, permissions)?;
        debug!("Set mode {:o} on: {}", mode, path.display());
    }

    #[cfg(not(unix))]
    {
        debug!(
            "Skipping mode {:o} on non-Unix platform for: {}",
            mode,
            path.display()
        );
    }

    Ok(())
}

/// Check whether a path names an existing regular file.
///
/// Symlinks are followed, so a link to a file counts.
pub fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}
