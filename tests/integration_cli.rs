// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests argument patterns users actually type and the requests they produce.

use clap::Parser;
use ump::cli::Cli;

// =============================================================================
// Release types
// =============================================================================

#[test]
fn cli_every_increment_kind_parses() {
    for kind in ["major", "minor", "patch", "premajor", "preminor", "prepatch"] {
        let cli = Cli::try_parse_from(["ump", kind]).unwrap();
        assert_eq!(cli.bump.release_type.as_deref(), Some(kind));
    }
}

#[test]
fn cli_explicit_version_with_globs() {
    let cli = Cli::try_parse_from(["ump", "2.0.0-rc.1", "package.json", "packages/*/package.json"])
        .unwrap();
    let request = cli.bump.to_request();
    assert_eq!(request.release_type.as_deref(), Some("2.0.0-rc.1"));
    assert_eq!(request.files, ["package.json", "packages/*/package.json"]);
}

#[test]
fn cli_flags_after_positionals() {
    let cli = Cli::try_parse_from(["ump", "patch", "-r", "-m", "v%s"]).unwrap();
    let request = cli.bump.to_request();
    assert_eq!(request.release, Some(true));
    assert_eq!(request.message.as_deref(), Some("v%s"));
}

// =============================================================================
// Switches defer to config when absent
// =============================================================================

#[test]
fn cli_absent_switches_are_unset() {
    let request = Cli::try_parse_from(["ump", "patch"]).unwrap().bump.to_request();
    assert_eq!(request.message, None);
    assert_eq!(request.release, None);
    assert_eq!(request.publish, None);
    assert_eq!(request.autostash, None);
    assert_eq!(request.skip_pull, None);
    assert_eq!(request.extras, None);
    assert!(!request.debug);
}

#[test]
fn cli_long_forms() {
    let cli = Cli::try_parse_from([
        "ump",
        "--release",
        "--publish",
        "--skip-pull",
        "--debug",
        "--yes",
        "--access",
        "public",
        "minor",
    ])
    .unwrap();
    assert!(cli.bump.yes);
    let request = cli.bump.to_request();
    assert_eq!(request.publish, Some(true));
    assert_eq!(request.skip_pull, Some(true));
    assert!(request.debug);
    assert_eq!(request.publish_flags.len(), 1);
}

#[test]
fn cli_log_level_range() {
    assert!(Cli::try_parse_from(["ump", "-l", "0"]).is_ok());
    assert!(Cli::try_parse_from(["ump", "-l", "5"]).is_ok());
    assert!(Cli::try_parse_from(["ump", "-l", "6"]).is_err());
}
