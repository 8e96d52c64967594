// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

fn shell(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("sh").args(["-c", script])
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .args(["hello"])
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = shell("echo boom >&2; exit 3")
        .capture_output()
        .run()
        .await
        .unwrap_err();

    match err.downcast_ref::<ProcessError>() {
        Some(ProcessError::NonZeroExit { code, stderr, .. }) => {
            assert_eq!(*code, 3);
            assert_eq!(stderr, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_output_not_captured_by_default() {
    let output = shell("echo logged only").run().await.unwrap();
    assert!(output.success());
    assert_eq!(output.stdout(), "");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_invalid_utf8_keeps_later_lines() {
    let output = shell(r"printf ' M caf\351.txt\r\n M src/app.js\n'")
        .capture_output()
        .run()
        .await
        .unwrap();

    let lines: Vec<&str> = output.stdout().lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], " M caf\u{FFFD}.txt");
    assert_eq!(lines[1], " M src/app.js");
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::SpawnFailed { .. })
    ));
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "").unwrap();

    let output = ProcessBuilder::new("ls")
        .cwd(dir.path())
        .capture_output()
        .run()
        .await
        .unwrap();
    assert_eq!(output.stdout().trim(), "marker.txt");
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("git").args(["commit", "-m", "Release 1.0.0"]);
    assert_eq!(builder.command_line(), "git commit -m \"Release 1.0.0\"");
}

#[cfg(not(windows))]
#[test]
fn test_executable_lookup_found() {
    let path = ProcessBuilder::find("sh").expect("sh should be in PATH");
    assert!(path.exists());
    assert!(ProcessBuilder::exists("sh"));
    assert_eq!(ProcessBuilder::find("sh"), Some(path));
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";
    assert!(!ProcessBuilder::exists(program));
    assert!(ProcessBuilder::find(program).is_none());
}
