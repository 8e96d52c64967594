// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::types::PublishFlag;
use crate::error::GitError;
use crate::git::cmd::{
    add, commit, escape_message, publish, pull, push, push_tags, render_message, status, tag,
};
use crate::git::discovery::{ensure_repository, is_git_repo};
use crate::git::status::{dirty_lines, status_path};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// --- discovery ---

#[test]
fn test_repository_with_git_dir() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    std::fs::write(temp.path().join(".git/config"), "[core]\n").unwrap();

    assert!(ensure_repository(temp.path()).is_ok());
    assert!(is_git_repo(temp.path()));
}

#[test]
fn test_repository_with_pointer_file() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".git"), "gitdir: ../.git/modules/lib\n").unwrap();

    assert!(ensure_repository(temp.path()).is_ok());
}

#[test]
fn test_repository_missing() {
    let temp = temp_dir();
    let err = ensure_repository(temp.path()).unwrap_err();
    assert!(matches!(err, GitError::RepoNotFound { .. }));
    assert!(
        err.to_string()
            .starts_with("You cannot \"release\" this version. You are not in a git repository.")
    );
}

#[test]
fn test_repository_git_dir_without_config() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    assert!(!is_git_repo(temp.path()));
}

// --- status ---

#[test]
fn test_status_path_forms() {
    assert_eq!(status_path(" M package.json").as_deref(), Some("package.json"));
    assert_eq!(status_path("A  ./lib/a.js").as_deref(), Some("lib/a.js"));
    assert_eq!(status_path("R  old.js -> new.js").as_deref(), Some("new.js"));
    assert_eq!(
        status_path(r#" M "docs/with space.md""#).as_deref(),
        Some("docs/with space.md")
    );
    assert_eq!(status_path("M"), None);
}

#[test]
fn test_dirty_lines_filters_bump_set_and_untracked() {
    let porcelain = " M package.json\n M README.md\n?? scratch.txt\n M src/app.js\n";
    let lines = dirty_lines(porcelain, &["package.json", "README.md"]);
    assert_eq!(lines, [" M src/app.js"]);
}

#[test]
fn test_dirty_lines_normalizes_both_sides() {
    let porcelain = " M sub/package.json\nMM ./other.json\n";
    let lines = dirty_lines(porcelain, &["./sub/package.json", "other.json"]);
    assert!(lines.is_empty());
}

#[test]
fn test_dirty_lines_clean_tree() {
    assert!(dirty_lines("", &["package.json"]).is_empty());
    assert!(dirty_lines("\n\n", &["package.json"]).is_empty());
}

#[test]
fn test_dirty_lines_kept_verbatim() {
    let lines = dirty_lines("MM src/index.js\r\n D gone.js\n", &["package.json"]);
    assert_eq!(lines, ["MM src/index.js", " D gone.js"]);
}

// --- commands ---

#[test]
fn test_escape_message() {
    insta::assert_snapshot!(
        escape_message(r#"Release "1.0.0" $HOME `x` \n"#),
        @r#"Release \"1.0.0\" \$HOME \`x\` \\n"#
    );
}

#[test]
fn test_render_message_first_placeholder_only() {
    assert_eq!(render_message("Release %s", "1.0.1"), "Release 1.0.1");
    assert_eq!(render_message("v%s (%s)", "2.0.0"), "v2.0.0 (%s)");
    assert_eq!(render_message("no placeholder", "2.0.0"), "no placeholder");
}

#[test]
fn test_release_command_strings() {
    let files = vec!["package.json".to_string(), "README.md".to_string()];
    let msg = "Release \"1.0.1\"";
    let rendered: Vec<String> = [
        status(),
        pull(true),
        pull(false),
        add(&files),
        commit(msg),
        tag("1.0.1", msg),
        push(),
        push_tags(),
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        rendered,
        [
            "git status --porcelain",
            "git pull --rebase --autostash",
            "git pull --rebase",
            "git add package.json README.md",
            r#"git commit -m "Release \"1.0.1\"""#,
            r#"git tag 1.0.1 -f -a -m "Release \"1.0.1\"""#,
            "git push",
            "git push --tags",
        ]
    );
}

#[test]
fn test_commit_args_are_unescaped() {
    let cmd = commit("Release $1");
    assert_eq!(cmd.program(), "git");
    assert_eq!(cmd.args(), ["commit", "-m", "Release $1"]);
}

#[test]
fn test_publish_flags_rendering() {
    let mut flags = BTreeMap::new();
    flags.insert("access".to_string(), PublishFlag::Text("public".to_string()));
    flags.insert("dry-run".to_string(), PublishFlag::Switch(true));
    flags.insert("provenance".to_string(), PublishFlag::Switch(false));
    flags.insert("otp".to_string(), PublishFlag::Number(123_456));

    let cmd = publish("npm", &flags);
    assert_eq!(
        cmd.to_string(),
        "npm publish --access public --dry-run --otp 123456"
    );
    assert_eq!(publish("pnpm", &BTreeMap::new()).to_string(), "pnpm publish");
}

#[test]
fn test_status_against_real_repository() {
    use std::process::Command;

    let temp = temp_dir();
    let git = |args: &[&str]| {
        Command::new("git")
            .args(args)
            .current_dir(temp.path())
            .output()
            .expect("git should run")
    };
    git(&["init", "--quiet"]);
    std::fs::write(temp.path().join("package.json"), "{}\n").unwrap();
    std::fs::write(temp.path().join("app.js"), "").unwrap();
    git(&["add", "package.json", "app.js"]);
    std::fs::write(temp.path().join("untracked.txt"), "").unwrap();

    let output = git(&["status", "--porcelain"]);
    let porcelain = String::from_utf8_lossy(&output.stdout);

    assert!(ensure_repository(temp.path()).is_ok());
    assert_eq!(dirty_lines(&porcelain, &["package.json"]), ["A  app.js"]);
}
