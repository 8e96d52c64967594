// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BumpError, BumpErrorKind, ConfigError, GitError, Result};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        key: "regex.flags".to_string(),
        message: "unsupported flag 'y'".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'regex.flags': unsupported flag 'y'");
}

#[test]
fn test_bump_error_displays_kind_message() {
    let err = BumpError {
        kind: BumpErrorKind::NoReleaseType,
        release_type: None,
        source_file: Some("package.json".to_string()),
        version: Some("1.0.0".to_string()),
    };
    assert_eq!(err.to_string(), "You need to provide a release type");
    assert_eq!(
        err.fields(),
        [
            ("release_type", ""),
            ("source_file", "package.json"),
            ("version", "1.0.0"),
        ]
    );
}

#[test]
fn test_bump_error_survives_anyhow_downcast() {
    let result: Result<()> = Err(BumpError {
        kind: BumpErrorKind::InvalidVersion,
        release_type: Some("patch".to_string()),
        source_file: Some("package.json".to_string()),
        version: Some("banana".to_string()),
    }
    .into());
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<BumpError>().map(|b| b.kind),
        Some(BumpErrorKind::InvalidVersion)
    );
    assert_eq!(err.to_string(), "One or more files do not have a valid version.");
}

#[test]
fn test_uncommitted_changes_lists_lines() {
    let err = GitError::UncommittedChanges {
        lines: vec![" M src/lib.js".to_string(), "A  new.js".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Git working directory not clean:\n\t M src/lib.js\n\tA  new.js"
    );
}
