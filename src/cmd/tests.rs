// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Mutex;

use futures_util::future::BoxFuture;
use tempfile::TempDir;

use super::bump::{execute_bump, report_bump_error, report_outcome};
use super::config::{build_config_loader, write_config_report};
use crate::cli::bump::BumpArgs;
use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::core::process::builder::ProcessOutput;
use crate::error::{BumpError, BumpErrorKind, Result};
use crate::git::cmd::CommandLine;
use crate::release::Outcome;
use crate::release::prompt::AssumeYes;
use crate::release::runner::CommandRunner;
use crate::release::sequence::Sequence;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl CommandRunner for Recorder {
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        _cwd: &'a Path,
    ) -> BoxFuture<'a, Result<ProcessOutput>> {
        Box::pin(async move {
            self.0.lock().unwrap().push(command.to_string());
            Ok(ProcessOutput::new(0, String::new(), String::new()))
        })
    }

    fn locate(&self, _program: &str) -> bool {
        true
    }
}

// --- reporting ---

#[test]
fn test_report_outcome() {
    assert_eq!(
        render(|out| report_outcome(&Outcome::Completed, out)),
        "*** DONE! ***\n"
    );
    assert_eq!(
        render(|out| report_outcome(&Outcome::Declined, out)),
        "\nHalted execution. Not bumping files.\n"
    );
    assert!(
        render(|out| report_outcome(&Outcome::DryRun(Sequence::default()), out))
            .contains("nothing was executed")
    );
}

#[test]
fn test_report_missing_release_type() {
    let err = BumpError {
        kind: BumpErrorKind::NoReleaseType,
        release_type: None,
        source_file: Some("package.json".to_string()),
        version: Some("1.4.2".to_string()),
    };
    assert_eq!(
        render(|out| report_bump_error(&err, out)),
        "\nCURRENT VERSION: 1.4.2\nYou need to provide a release type\n"
    );
}

#[test]
fn test_report_invalid_release_type() {
    let err = BumpError {
        kind: BumpErrorKind::InvalidReleaseType,
        release_type: Some("huge".to_string()),
        source_file: Some("package.json".to_string()),
        version: Some("1.4.2".to_string()),
    };
    let printed = render(|out| report_bump_error(&err, out));
    insta::assert_snapshot!(printed.lines().nth(1).unwrap_or_default(), @"You provided an invalid release type. See semver.org for more information.");
    assert!(printed.ends_with("release_type: huge\nsource_file: package.json\nversion: 1.4.2\n"));
}

// --- config loading ---

#[test]
fn test_config_layers_rc_toml_and_cli_files() {
    let home = temp_dir();
    let project = temp_dir();
    std::fs::write(
        home.path().join(".umprc"),
        r#"{"message": "home %s", "registry": "pnpm"}"#,
    )
    .unwrap();
    std::fs::write(project.path().join(".umprc"), r#"{"message": "project %s"}"#).unwrap();
    std::fs::write(project.path().join("ump.toml"), "skip_pull = true\n").unwrap();
    let extra = project.path().join("ci.toml");
    std::fs::write(&extra, "release = true\n").unwrap();

    let global = GlobalOptions {
        configs: vec![extra.clone()],
        ..GlobalOptions::default()
    };
    let loader = build_config_loader(&global, project.path(), Some(home.path()));
    let files = loader.format_loaded_files();
    let config = loader.build().unwrap();

    assert_eq!(config.message, "project %s");
    assert_eq!(config.registry, "pnpm");
    assert!(config.skip_pull);
    assert!(config.release);
    assert_eq!(files.len(), 4);
    assert!(files[0].starts_with("1. [rc] "));
    assert!(files[3].ends_with("ci.toml"));
}

#[test]
fn test_config_report_without_files() {
    let printed = render(|out| write_config_report(&Config::default(), &[], out));
    assert!(printed.contains("message"));
    assert!(printed.ends_with("\nNo configuration files loaded\n"));
}

// --- bump ---

#[tokio::test]
async fn test_execute_bump_writes_manifest() {
    let project = temp_dir();
    std::fs::write(
        project.path().join("package.json"),
        "{\n  \"version\": \"0.9.9\"\n}\n",
    )
    .unwrap();
    let args = BumpArgs {
        release_type: Some("minor".to_string()),
        yes: true,
        ..BumpArgs::default()
    };
    let runner = Recorder::default();
    let mut out = Vec::new();

    let outcome = execute_bump(
        &args,
        &Config::default(),
        project.path(),
        &AssumeYes,
        &runner,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Completed);
    assert!(runner.0.lock().unwrap().is_empty());
    assert_eq!(
        std::fs::read_to_string(project.path().join("package.json")).unwrap(),
        "{\n  \"version\": \"0.10.0\"\n}\n"
    );
}

#[tokio::test]
async fn test_execute_bump_without_release_type() {
    let project = temp_dir();
    std::fs::write(project.path().join("package.json"), "{\"version\": \"3.0.0\"}").unwrap();

    let err = execute_bump(
        &BumpArgs::default(),
        &Config::default(),
        project.path(),
        &AssumeYes,
        &Recorder::default(),
        &mut Vec::new(),
    )
    .await
    .unwrap_err();

    let bump = err.downcast_ref::<BumpError>().unwrap();
    assert_eq!(bump.kind, BumpErrorKind::NoReleaseType);
    assert_eq!(
        std::fs::read_to_string(project.path().join("package.json")).unwrap(),
        "{\"version\": \"3.0.0\"}"
    );
}
