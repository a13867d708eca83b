//! Menu shortcut management.
//!
//! Writes `<name>_wine.desktop` files into the applications directory and
//! refreshes the desktop database so the menu picks them up.

use super::desktop_entry::DesktopEntry;
use crate::config::{AppConfig, RunnerConfig};
use crate::error::ShortcutError;
use crate::platform::{self, CommandRunner, SystemCommandRunner};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Menu name for an executable: its base name without the last extension.
pub fn display_name(exe_path: &Path) -> String {
    exe_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Creates and removes Wine launcher shortcuts.
pub struct ShortcutManager<R = SystemCommandRunner> {
    config: RunnerConfig,
    runner: R,
}

impl ShortcutManager {
    /// Create a manager that runs real commands.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_runner(config, SystemCommandRunner)
    }
}

impl<R: CommandRunner> ShortcutManager<R> {
    /// Create a manager with a custom command runner.
    pub fn with_runner(config: RunnerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Destination file for `exe_path`'s shortcut. Nothing is written.
    pub fn shortcut_path(&self, exe_path: &Path) -> PathBuf {
        self.config.apps_dir.join(format!(
            "{}{}",
            display_name(exe_path),
            AppConfig::SHORTCUT_SUFFIX
        ))
    }

    /// Create (or overwrite) the menu shortcut for `exe_path`.
    ///
    /// Returns the display name used for the entry.
    pub fn create_shortcut(&self, exe_path: impl AsRef<Path>) -> Result<String, ShortcutError> {
        let exe_path = exe_path.as_ref();

        if !platform::is_regular_file(exe_path) {
            return Err(ShortcutError::NotFound(exe_path.to_path_buf()));
        }

        // Exec= needs an absolute path; the menu launches from another cwd.
        let exe_path = std::path::absolute(exe_path)
            .map_err(|e| ShortcutError::io_with_path(e, "resolve executable path", exe_path))?;

        let name = display_name(&exe_path);
        let apps_dir = &self.config.apps_dir;

        fs::create_dir_all(apps_dir)
            .map_err(|e| ShortcutError::io_with_path(e, "create applications directory", apps_dir))?;

        let shortcut_path = self.shortcut_path(&exe_path);
        if shortcut_path.exists() {
            debug!("Overwriting existing shortcut {:?}", shortcut_path);
        }

        let entry = DesktopEntry::wine_launcher(&name, &self.config.wine_command, &exe_path);
        entry.write_to_file(&shortcut_path, self.config.permissions.mode())?;

        self.refresh_database()?;

        info!("Created shortcut for {} at {:?}", name, shortcut_path);

        Ok(name)
    }

    /// Remove the menu shortcut for `exe_path`.
    ///
    /// Returns false when no shortcut existed. The executable itself does
    /// not need to exist.
    pub fn remove_shortcut(&self, exe_path: impl AsRef<Path>) -> Result<bool, ShortcutError> {
        let shortcut_path = self.shortcut_path(exe_path.as_ref());

        if !shortcut_path.exists() {
            debug!("No shortcut at {:?}", shortcut_path);
            return Ok(false);
        }

        fs::remove_file(&shortcut_path)
            .map_err(|e| ShortcutError::io_with_path(e, "remove shortcut", &shortcut_path))?;

        self.refresh_database()?;

        info!("Removed shortcut {:?}", shortcut_path);

        Ok(true)
    }

    /// Run the desktop database refresh command against the apps directory.
    fn refresh_database(&self) -> Result<(), ShortcutError> {
        let command = &self.config.refresh_command;

        let output = self
            .runner
            .run(command, &[self.config.apps_dir.as_os_str()])
            .map_err(|e| ShortcutError::RefreshFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.success() {
            warn!("{} exited with {:?}: {}", command, output.code, output.stderr);
            return Err(ShortcutError::RefreshFailed {
                command: command.clone(),
                message: output.stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::CommandOutput;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::io;
    use tempfile::TempDir;

    /// Records calls and replies with a fixed exit code.
    struct RecordingRunner {
        code: i32,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl RecordingRunner {
        fn exiting(code: i32) -> Self {
            Self {
                code,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&OsStr]) -> io::Result<CommandOutput> {
            self.calls.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
            ));
            Ok(CommandOutput {
                code: Some(self.code),
                stdout: String::new(),
                stderr: if self.code == 0 {
                    String::new()
                } else {
                    "database locked\n".to_string()
                },
            })
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/Game.exe")), "Game");
        assert_eq!(display_name(Path::new("/a/setup.v2.exe")), "setup.v2");
        assert_eq!(display_name(Path::new("/a/README")), "README");
    }

    #[test]
    fn test_shortcut_path() {
        let manager = ShortcutManager::with_runner(
            RunnerConfig::new("/apps"),
            RecordingRunner::exiting(0),
        );
        assert_eq!(
            manager.shortcut_path(Path::new("/x/Game.exe")),
            PathBuf::from("/apps/Game_wine.desktop")
        );
    }

    #[test]
    fn test_create_shortcut_refreshes_database() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("Tool.exe");
        fs::write(&exe, b"MZ").unwrap();
        let apps_dir = temp_dir.path().join("share").join("applications");

        let runner = RecordingRunner::exiting(0);
        let manager = ShortcutManager::with_runner(RunnerConfig::new(&apps_dir), &runner);

        let name = manager.create_shortcut(&exe).unwrap();
        assert_eq!(name, "Tool");
        assert!(apps_dir.join("Tool_wine.desktop").is_file());

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "update-desktop-database");
        assert_eq!(calls[0].1, vec![apps_dir.to_string_lossy().into_owned()]);
    }

    #[test]
    fn test_refresh_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("Tool.exe");
        fs::write(&exe, b"MZ").unwrap();

        let manager = ShortcutManager::with_runner(
            RunnerConfig::new(temp_dir.path().join("apps")),
            RecordingRunner::exiting(2),
        );

        match manager.create_shortcut(&exe) {
            Err(ShortcutError::RefreshFailed { command, message }) => {
                assert_eq!(command, "update-desktop-database");
                assert_eq!(message, "database locked");
            }
            other => panic!("expected RefreshFailed, got {:?}", other),
        }
    }

    struct UnstartableRunner;

    impl CommandRunner for UnstartableRunner {
        fn run(&self, _program: &str, _args: &[&OsStr]) -> io::Result<CommandOutput> {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "update-desktop-database: command not found",
            ))
        }
    }

    #[test]
    fn test_refresh_spawn_failure_keeps_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("Tool.exe");
        fs::write(&exe, b"MZ").unwrap();

        let manager = ShortcutManager::with_runner(
            RunnerConfig::new(temp_dir.path().join("apps")),
            UnstartableRunner,
        );

        match manager.create_shortcut(&exe) {
            Err(ShortcutError::RefreshFailed { command, message }) => {
                assert_eq!(command, "update-desktop-database");
                assert_eq!(message, "update-desktop-database: command not found");
            }
            other => panic!("expected RefreshFailed, got {:?}", other),
        }
        assert!(manager.shortcut_path(&exe).is_file());
    }

    #[test]
    fn test_remove_shortcut() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("Tool.exe");
        fs::write(&exe, b"MZ").unwrap();

        let runner = RecordingRunner::exiting(0);
        let manager =
            ShortcutManager::with_runner(RunnerConfig::new(temp_dir.path().join("apps")), &runner);

        manager.create_shortcut(&exe).unwrap();
        assert!(manager.remove_shortcut(&exe).unwrap());
        assert!(!manager.shortcut_path(&exe).exists());
        assert!(!manager.remove_shortcut(&exe).unwrap());

        // create + remove each refresh once; the no-op removal does not.
        assert_eq!(runner.calls.borrow().len(), 2);
    }
}
