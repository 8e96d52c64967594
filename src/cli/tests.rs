// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::cli::bump::Access;
use crate::config::types::PublishFlag;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_bare() {
    let cli = Cli::try_parse_from(["ump"]).unwrap();
    assert_eq!(cli.bump.release_type, None);
    assert!(cli.bump.files.is_empty());
    assert!(!cli.global.print_config);

    let request = cli.bump.to_request();
    assert_eq!(request.release, None);
    assert_eq!(request.autostash, None);
    assert!(request.publish_flags.is_empty());
}

#[test]
fn test_parse_release_type_and_files() {
    let cli = Cli::try_parse_from(["ump", "minor", "package.json", "bower.json"]).unwrap();
    assert_eq!(cli.bump.release_type.as_deref(), Some("minor"));
    assert_eq!(cli.bump.files, ["package.json", "bower.json"]);
}

#[test]
fn test_parse_release_flags() {
    let cli = Cli::try_parse_from([
        "ump",
        "-r",
        "-x",
        "--no-autostash",
        "-m",
        "chore: %s",
        "-y",
        "patch",
    ])
    .unwrap();
    assert!(cli.bump.yes);

    let request = cli.bump.to_request();
    assert_eq!(request.release_type.as_deref(), Some("patch"));
    assert_eq!(request.release, Some(true));
    assert_eq!(request.skip_pull, Some(true));
    assert_eq!(request.autostash, Some(false));
    assert_eq!(request.message.as_deref(), Some("chore: %s"));
    assert!(!request.debug);
}

#[test]
fn test_parse_publish_access() {
    let cli = Cli::try_parse_from(["ump", "-p", "--access", "restricted", "1.2.3"]).unwrap();
    assert_eq!(cli.bump.access, Some(Access::Restricted));

    let request = cli.bump.to_request();
    assert_eq!(request.publish, Some(true));
    assert_eq!(
        request.publish_flags.get("access"),
        Some(&PublishFlag::Text("restricted".to_string()))
    );
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "ump",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "4",
        "--log-file",
        "ump.log",
        "--print-config",
        "-d",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("ump.log")));
    assert!(cli.global.print_config);
    assert!(cli.bump.to_request().debug);
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["ump", "-l", "9"]).is_err());
    assert!(Cli::try_parse_from(["ump", "--access", "secret"]).is_err());
    assert!(Cli::try_parse_from(["ump", "--unknown"]).is_err());
}
