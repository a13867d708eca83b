//! Desktop entry (.desktop file) generation.
//!
//! Implements the subset of the XDG Desktop Entry Specification the runner
//! writes: name, exec line, type, categories and icon.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::DesktopEntryConfig;
use crate::error::ShortcutError;
use crate::platform;
use tracing::debug;

/// A desktop entry representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Entry name (shown in menus).
    pub name: String,
    /// Executable command line.
    pub exec: String,
    /// Entry type (usually "Application").
    pub entry_type: String,
    /// Categories (written semicolon-terminated).
    pub categories: Vec<String>,
    /// Icon name or path.
    pub icon: String,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            exec: String::new(),
            entry_type: DesktopEntryConfig::ENTRY_TYPE.to_string(),
            categories: vec![DesktopEntryConfig::CATEGORY.to_string()],
            icon: DesktopEntryConfig::ICON.to_string(),
        }
    }
}

/// Quote a path for an `Exec=` line.
///
/// Inside double quotes the Desktop Entry Specification reserves `"`,
/// `` ` ``, `$` and `\`, which must be backslash-escaped. The result is a
/// command-line argument; [`escape_value`] still applies when it is written.
pub fn quote_exec_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Apply the string escapes for a key's value.
///
/// A raw line break would end the value and start a new key, so `\n`, `\r`
/// and `\t` are written as escape sequences and `\` is doubled.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Entry that launches `exe_path` through `wine_command`.
    pub fn wine_launcher(name: &str, wine_command: &str, exe_path: &Path) -> Self {
        Self::builder()
            .name(name)
            .exec(format!(
                "{} {}",
                wine_command,
                quote_exec_arg(&exe_path.to_string_lossy())
            ))
            .build()
    }

    /// Write the entry to `path` and apply `mode`.
    ///
    /// The parent directory must already exist. An existing file is
    /// replaced.
    pub fn write_to_file(&self, path: &Path, mode: u32) -> Result<(), ShortcutError> {
        fs::write(path, self.to_string())
            .map_err(|e| ShortcutError::io_with_path(e, "write desktop file", path))?;

        platform::set_mode(path, mode)
            .map_err(|e| ShortcutError::io_with_path(e, "set permissions", path))?;

        debug!("Wrote desktop entry to {:?}", path);

        Ok(())
    }
}

impl fmt::Display for DesktopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Desktop Entry]")?;
        writeln!(f, "Name={}", escape_value(&self.name))?;
        writeln!(f, "Exec={}", escape_value(&self.exec))?;
        writeln!(f, "Type={}", escape_value(&self.entry_type))?;

        if !self.categories.is_empty() {
            let categories: Vec<String> =
                self.categories.iter().map(|c| escape_value(c)).collect();
            writeln!(f, "Categories={};", categories.join(";"))?;
        }

        writeln!(f, "Icon={}", escape_value(&self.icon))
    }
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_wine_launcher_format() {
        let entry = DesktopEntry::wine_launcher(
            "Game",
            "wine",
            Path::new("/home/u/Downloads/Game.exe"),
        );

        assert_eq!(
            entry.to_string(),
            "[Desktop Entry]\n\
             Name=Game\n\
             Exec=wine \"/home/u/Downloads/Game.exe\"\n\
             Type=Application\n\
             Categories=Wine;\n\
             Icon=wine\n"
        );
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("Plain Name (x86)"), "Plain Name (x86)");
        assert_eq!(escape_value("a\nb\rc\td"), "a\\nb\\rc\\td");
        assert_eq!(escape_value("C:\\Games"), "C:\\\\Games");
    }

    #[test]
    fn test_line_breaks_stay_inside_values() {
        let entry = DesktopEntry::wine_launcher(
            "Game\nNoDisplay=true",
            "wine",
            Path::new("/x/Game\nNoDisplay=true.exe"),
        );

        let content = entry.to_string();
        assert_eq!(content.lines().count(), 6);
        assert!(content.contains("Name=Game\\nNoDisplay=true\n"));
        assert!(content.contains("Exec=wine \"/x/Game\\nNoDisplay=true.exe\"\n"));
        assert!(!content.lines().any(|l| l.starts_with("NoDisplay=")));
    }

    #[test]
    fn test_reserved_exec_characters_are_escaped_twice() {
        // Quoting doubles the backslash, value escaping doubles it again.
        let entry = DesktopEntry::wine_launcher("a", "wine", Path::new("/x/a\\b$.exe"));
        assert!(entry
            .to_string()
            .contains("Exec=wine \"/x/a\\\\\\\\b\\\\$.exe\"\n"));
    }

    #[test]
    fn test_quote_exec_arg_escapes_reserved() {
        assert_eq!(
            quote_exec_arg("/opt/Program Files (x86)/a.exe"),
            "\"/opt/Program Files (x86)/a.exe\""
        );
        assert_eq!(quote_exec_arg("C:\\$x\"`"), "\"C:\\\\\\$x\\\"\\`\"");
    }

    #[test]
    fn test_write_desktop_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Test_wine.desktop");

        let entry = DesktopEntry::wine_launcher("Test", "wine", Path::new("/x/Test.exe"));
        entry.write_to_file(&file_path, 0o755).unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("Name=Test"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&file_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_write_into_missing_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("absent").join("x.desktop");

        let err = DesktopEntry::default()
            .write_to_file(&file_path, 0o755)
            .unwrap_err();
        assert_eq!(err.kind(), "io_failure");
    }
}
