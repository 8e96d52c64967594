// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command lines.
//!
//! ```text
//! git status --porcelain
//! git pull --rebase [--autostash]
//! git add <files>
//! git commit -m "<escaped message>"
//! git tag <version> -f -a -m "<escaped message>"
//! git push
//! git push --tags
//! <registry> publish [--flag value | --switch]
//! ```
//!
//! Commands run as argument vectors without a shell; the escaped form is the
//! display string shown in plans and logs.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::types::PublishFlag;

/// One external command: what runs and how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    display: String,
}

impl CommandLine {
    /// Creates a command whose display is its words joined by spaces.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let display = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            program: program.to_string(),
            args,
            display,
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: String) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Backslash-escapes `"`, `` ` ``, `$` and `\`.
#[must_use]
pub fn escape_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Substitutes the first `%s` in `template` with `version`.
#[must_use]
pub fn render_message(template: &str, version: &str) -> String {
    template.replacen("%s", version, 1)
}

#[must_use]
pub fn status() -> CommandLine {
    CommandLine::new("git", ["status", "--porcelain"])
}

#[must_use]
pub fn pull(autostash: bool) -> CommandLine {
    let mut args = vec!["pull", "--rebase"];
    if autostash {
        args.push("--autostash");
    }
    CommandLine::new("git", args)
}

#[must_use]
pub fn add(files: &[String]) -> CommandLine {
    CommandLine::new("git", std::iter::once("add".to_string()).chain(files.iter().cloned()))
}

#[must_use]
pub fn commit(message: &str) -> CommandLine {
    let display = format!("git commit -m \"{}\"", escape_message(message));
    CommandLine::new("git", ["commit", "-m", message]).with_display(display)
}

/// Annotated tag named `version`, force-moved if it already exists.
#[must_use]
pub fn tag(version: &str, message: &str) -> CommandLine {
    let display = format!("git tag {version} -f -a -m \"{}\"", escape_message(message));
    CommandLine::new("git", ["tag", version, "-f", "-a", "-m", message]).with_display(display)
}

#[must_use]
pub fn push() -> CommandLine {
    CommandLine::new("git", ["push"])
}

#[must_use]
pub fn push_tags() -> CommandLine {
    CommandLine::new("git", ["push", "--tags"])
}

/// Registry publish with flags rendered in name order.
///
/// `true` renders as `--name`, `false` is omitted, anything else as
/// `--name value`.
#[must_use]
pub fn publish(registry: &str, flags: &BTreeMap<String, PublishFlag>) -> CommandLine {
    let mut args = vec!["publish".to_string()];
    for (name, value) in flags {
        match value {
            PublishFlag::Switch(true) => args.push(format!("--{name}")),
            PublishFlag::Switch(false) => {}
            other => {
                args.push(format!("--{name}"));
                args.push(other.to_string());
            }
        }
    }
    CommandLine::new(registry, args)
}
