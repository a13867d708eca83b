//! Runner panels.
//!
//! A panel is a default location plus a sink for status lines. Front-ends
//! instantiate one per tab and route user input through it; the panel
//! turns operation results into the messages the user sees and still hands
//! the typed result back.

use crate::config::PanelConfig;
use crate::error::{LaunchError, Result, RunnerError, ShortcutError};
use crate::launcher::{LaunchOutput, Launcher};
use crate::platform::{self, CommandRunner};
use crate::shortcut::ShortcutManager;
use std::path::{Path, PathBuf};

/// Receives user-facing status lines.
pub trait ResultSink {
    fn report(&mut self, message: &str);
}

impl ResultSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Operations a panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Run,
    CreateShortcut,
}

impl PanelAction {
    fn label(self) -> &'static str {
        match self {
            PanelAction::Run => "run",
            PanelAction::CreateShortcut => "shortcut creation",
        }
    }
}

/// One runner tab: title, default path, allowed actions and result sink.
pub struct RunnerPanel<S> {
    title: String,
    default_path: PathBuf,
    actions: Vec<PanelAction>,
    sink: S,
}

impl<S: ResultSink> RunnerPanel<S> {
    pub fn new(
        title: impl Into<String>,
        default_path: impl AsRef<Path>,
        actions: Vec<PanelAction>,
        sink: S,
    ) -> Self {
        Self {
            title: title.into(),
            default_path: default_path.as_ref().to_path_buf(),
            actions,
            sink,
        }
    }

    /// Panel for executables in `~/Downloads`; run only.
    pub fn downloads(sink: S) -> Result<Self> {
        Ok(Self::new(
            "Downloads EXE",
            platform::home_relative(PanelConfig::DOWNLOADS_DIR)?,
            vec![PanelAction::Run],
            sink,
        ))
    }

    /// Panel for programs installed in the default Wine prefix; run and
    /// shortcut creation.
    pub fn wine_programs(sink: S) -> Result<Self> {
        Ok(Self::new(
            "Wine 32bit Apps",
            platform::home_relative(PanelConfig::WINE_PROGRAMS_DIR)?,
            vec![PanelAction::CreateShortcut, PanelAction::Run],
            sink,
        ))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn allows(&self, action: PanelAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// User input, or the default path when input is absent or blank.
    pub fn resolve_path(&self, input: Option<&str>) -> PathBuf {
        match input.map(str::trim) {
            Some(text) if !text.is_empty() => PathBuf::from(text),
            _ => self.default_path.clone(),
        }
    }

    fn ensure_allowed(&self, action: PanelAction) -> Result<()> {
        if self.allows(action) {
            Ok(())
        } else {
            Err(RunnerError::ActionUnavailable {
                panel: self.title.clone(),
                action: action.label().to_string(),
            })
        }
    }

    /// Run the selected executable and report the outcome.
    pub fn run<R: CommandRunner>(
        &mut self,
        launcher: &Launcher<R>,
        input: Option<&str>,
    ) -> Result<LaunchOutput> {
        self.ensure_allowed(PanelAction::Run)?;
        let path = self.resolve_path(input);

        let result = launcher.run_exe(&path);
        let message = match &result {
            Ok(_) => "Run successfully".to_string(),
            Err(LaunchError::NotFound(_)) => "Error: File not found".to_string(),
            Err(LaunchError::NonZeroExit { stderr, .. }) => format!("Error running: {}", stderr),
            Err(e) => format!("Error: {}", e),
        };
        self.sink.report(&message);

        result.map_err(RunnerError::from)
    }

    /// Create a menu shortcut for the selected executable and report it.
    pub fn create_shortcut<R: CommandRunner>(
        &mut self,
        manager: &ShortcutManager<R>,
        input: Option<&str>,
    ) -> Result<String> {
        self.ensure_allowed(PanelAction::CreateShortcut)?;
        let path = self.resolve_path(input);

        let result = manager.create_shortcut(&path);
        let message = match &result {
            Ok(name) => format!("Shortcut created for {}", name),
            Err(ShortcutError::NotFound(_)) => "Error: File not found".to_string(),
            Err(e) => format!("Error creating shortcut: {}", e),
        };
        self.sink.report(&message);

        result.map_err(RunnerError::from)
    }
}
