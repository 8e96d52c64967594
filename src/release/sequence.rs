// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered release plan.
//!
//! ```text
//! release = false:   WriteVersion -> [Extras]
//! release = true:    CheckClean -> [Sync] -> WriteVersion -> [Extras] -> Release
//!                                  |                          |
//!                     unless skip_pull             only when extras exist
//! ```
//!
//! A `Sequence` is a plain list of step descriptors built fresh per run;
//! `Executor` dispatches on `StepKind`.

use std::fmt;

use crate::git::cmd::{self, CommandLine};

use super::options::ReleaseOptions;

/// What a step does when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Refuse to continue on unrelated pending changes.
    CheckClean,
    /// `git pull --rebase` before touching files.
    Sync,
    WriteVersion,
    Extras,
    /// add, commit, tag, push and optionally publish.
    Release,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CheckClean => "check-clean",
            Self::Sync => "sync",
            Self::WriteVersion => "write-version",
            Self::Extras => "extras",
            Self::Release => "release",
        })
    }
}

/// One planned step and its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    kind: StepKind,
    description: String,
}

impl Step {
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The release plan for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    /// Plans the steps `options` call for, in execution order.
    #[must_use]
    pub fn build(options: &ReleaseOptions) -> Self {
        let mut sequence = Self::default();

        if options.release {
            sequence.push(
                StepKind::CheckClean,
                format!("* Check working directory is clean ({})", cmd::status()),
            );
            if !options.skip_pull {
                sequence.push(StepKind::Sync, cmd::pull(options.autostash).to_string());
            }
        }

        sequence.push(
            StepKind::WriteVersion,
            format!(
                "* Update version to {} in {}",
                options.new_version,
                options.files.join(", ")
            ),
        );

        if !options.extras.is_empty() {
            sequence.push(
                StepKind::Extras,
                format!(
                    "* Update version (using RegEx) to {} in {}",
                    options.new_version,
                    options.extra_files().join(", ")
                ),
            );
        }

        if options.release {
            let commands: Vec<String> = release_commands(options)
                .iter()
                .map(ToString::to_string)
                .collect();
            sequence.push(StepKind::Release, commands.join("\n"));
        }

        sequence
    }

    fn push(&mut self, kind: StepKind, description: String) {
        self.steps.push(Step { kind, description });
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(Step::kind).collect()
    }

    /// One description per step, in order.
    #[must_use]
    pub fn render(&self) -> String {
        self.steps
            .iter()
            .map(Step::description)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Commands of the release step, in the order they must succeed.
#[must_use]
pub fn release_commands(options: &ReleaseOptions) -> Vec<CommandLine> {
    let message = options.commit_message();
    let mut commands = vec![
        cmd::add(&options.bump_set()),
        cmd::commit(&message),
        cmd::tag(&options.new_version, &message),
        cmd::push(),
        cmd::push_tags(),
    ];
    if options.publish {
        commands.push(cmd::publish(&options.registry, &options.publish_flags));
    }
    commands
}
