//! Running Windows executables through the compatibility layer.

use crate::config::RunnerConfig;
use crate::error::LaunchError;
use crate::platform::{self, CommandOutput, CommandRunner, SystemCommandRunner};
use std::path::Path;
use tracing::{debug, info, warn};

/// Output of a launch that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs executables with `<wine-command> <exe>` and waits for them.
pub struct Launcher<R = SystemCommandRunner> {
    wine_command: String,
    runner: R,
}

impl Launcher {
    /// Create a launcher that spawns real processes.
    pub fn new(config: &RunnerConfig) -> Self {
        Self::with_runner(config, SystemCommandRunner)
    }
}

impl<R: CommandRunner> Launcher<R> {
    /// Create a launcher with a custom command runner.
    pub fn with_runner(config: &RunnerConfig, runner: R) -> Self {
        Self {
            wine_command: config.wine_command.clone(),
            runner,
        }
    }

    /// Run `exe_path` and block until it exits.
    ///
    /// No process is spawned when the path does not name a regular file.
    pub fn run_exe(&self, exe_path: impl AsRef<Path>) -> Result<LaunchOutput, LaunchError> {
        let exe_path = exe_path.as_ref();

        if !platform::is_regular_file(exe_path) {
            return Err(LaunchError::NotFound(exe_path.to_path_buf()));
        }

        debug!("Launching {} {:?}", self.wine_command, exe_path);

        let CommandOutput {
            code,
            stdout,
            stderr,
        } = self
            .runner
            .run(&self.wine_command, &[exe_path.as_os_str()])
            .map_err(|source| LaunchError::SpawnFailure {
                program: self.wine_command.clone(),
                source,
            })?;

        if code != Some(0) {
            warn!("{:?} exited with {:?}", exe_path, code);
            return Err(LaunchError::NonZeroExit { code, stderr });
        }

        info!("{:?} ran successfully", exe_path);

        Ok(LaunchOutput { stdout, stderr })
    }
}
