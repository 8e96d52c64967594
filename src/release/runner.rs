// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External command execution seam.
//!
//! ```text
//! Executor --> dyn CommandRunner
//!                 |
//!        +--------+---------+
//!        v                  v
//!  ProcessRunner      (tests) recording runner
//!  ProcessBuilder
//! ```

use std::path::Path;

use futures_util::future::BoxFuture;

use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::Result;
use crate::git::cmd::CommandLine;

/// Runs external commands for the release executor.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` in `cwd` to completion.
    ///
    /// Fails when the command cannot start or exits non-zero.
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        cwd: &'a Path,
    ) -> BoxFuture<'a, Result<ProcessOutput>>;

    /// Whether `program` can be started.
    fn locate(&self, program: &str) -> bool {
        ProcessBuilder::exists(program)
    }
}

/// Runs commands as real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a self,
        command: &'a CommandLine,
        cwd: &'a Path,
    ) -> BoxFuture<'a, Result<ProcessOutput>> {
        Box::pin(
            ProcessBuilder::new(command.program())
                .args(command.args())
                .cwd(cwd)
                .name(command.program())
                .capture_output()
                .run(),
        )
    }
}
