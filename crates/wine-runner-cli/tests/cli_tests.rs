//! End-to-end tests for the wine-runner binary.
//!
//! `true`/`false` stand in for Wine so the tests run without it.

use std::process::{Command, Output};
use tempfile::TempDir;

fn wine_runner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wine-runner"))
        .args(args)
        .output()
        .expect("Failed to run wine-runner")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_reports_missing_tools() {
    let empty_path = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_wine-runner"))
        .arg("check")
        .env("PATH", empty_path.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("The following requirements are missing:\n"));
    for name in ["Wine", "Python 3", "Pip", "Update Desktop Database", "Graphical session"] {
        assert!(text.lines().any(|l| l == name), "missing {} in {}", name, text);
    }
}

#[test]
fn test_startup_gate_blocks_commands() {
    let empty_path = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_wine-runner"))
        .args(["run", "/nonexistent.exe"])
        .env("PATH", empty_path.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("requirements are missing"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_run_missing_file() {
    let output = wine_runner(&["--skip-checks", "run", "/nonexistent/Game.exe"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output).trim(), "Error: File not found");
}

#[cfg(unix)]
#[test]
fn test_run_success_and_failure() {
    let temp_dir = TempDir::new().unwrap();
    let exe = temp_dir.path().join("Game.exe");
    std::fs::write(&exe, b"MZ").unwrap();
    let exe = exe.to_string_lossy().into_owned();

    let ok = wine_runner(&["--skip-checks", "--wine", "true", "run", &exe]);
    assert!(ok.status.success());
    assert_eq!(stdout(&ok).trim(), "Run successfully");

    let failed = wine_runner(&["--skip-checks", "--wine", "false", "run", &exe]);
    assert!(!failed.status.success());
    assert!(stdout(&failed).starts_with("Error running:"));
}

#[cfg(unix)]
#[test]
fn test_shortcut_round_trip_with_custom_refresh() {
    let temp_dir = TempDir::new().unwrap();
    let exe = temp_dir.path().join("Setup.exe");
    std::fs::write(&exe, b"MZ").unwrap();
    let exe = exe.to_string_lossy().into_owned();
    let apps_dir = temp_dir.path().join("applications");
    let apps = apps_dir.to_string_lossy().into_owned();
    let with_refresh = |command: &str| {
        wine_runner(&[
            "--skip-checks",
            "--refresh-command",
            "true",
            "--apps-dir",
            &apps,
            command,
            &exe,
        ])
    };

    let created = with_refresh("shortcut");
    assert!(created.status.success());
    assert_eq!(stdout(&created).trim(), "Shortcut created for Setup");
    assert!(apps_dir.join("Setup_wine.desktop").is_file());

    let removed = with_refresh("remove-shortcut");
    assert!(removed.status.success());
    assert!(stdout(&removed).starts_with("Removed "));
    assert!(!apps_dir.join("Setup_wine.desktop").exists());
}

#[test]
fn test_remove_shortcut_without_existing_file() {
    let apps_dir = TempDir::new().unwrap();
    let output = wine_runner(&[
        "--skip-checks",
        "--apps-dir",
        &apps_dir.path().to_string_lossy(),
        "remove-shortcut",
        "/somewhere/Game.exe",
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("No shortcut at "));
    assert!(stdout(&output).contains("Game_wine.desktop"));
}

#[test]
fn test_defaults_json() {
    let output = wine_runner(&["--skip-checks", "defaults", "--json"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("\"title\": \"Downloads EXE\""));
    assert!(text.contains("\"title\": \"Wine 32bit Apps\""));
    assert!(text.contains("Program Files (x86)"));
}
