// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential step execution with rollback.
//!
//! ```text
//! for step in sequence:
//!     run step to completion
//!     on error:
//!         restore every file written so far (newest first)
//!         return the error; later steps never run
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info, warn};

use crate::error::{GitError, Result};
use crate::git::cmd;
use crate::git::discovery::ensure_repository;
use crate::git::status::dirty_lines;
use crate::utility::fs::write::write_atomic_async;

use super::extras;
use super::manifest;
use super::options::ReleaseOptions;
use super::runner::CommandRunner;
use super::sequence::{Sequence, StepKind, release_commands};

/// Original contents of files this run has rewritten.
#[derive(Debug, Default)]
struct Journal {
    entries: Vec<(PathBuf, String)>,
}

impl Journal {
    fn record(&mut self, path: PathBuf, original: String) {
        if !self.entries.iter().any(|(seen, _)| *seen == path) {
            self.entries.push((path, original));
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every original back, newest first; keeps going past failures.
    async fn rollback(self) {
        for (path, original) in self.entries.into_iter().rev() {
            match write_atomic_async(path.clone(), original.into_bytes()).await {
                Ok(()) => info!(file = %path.display(), "restored"),
                Err(e) => error!(file = %path.display(), error = %e, "restore failed"),
            }
        }
    }
}

/// Runs a [`Sequence`] against the project described by [`ReleaseOptions`].
pub struct Executor<'a> {
    options: &'a ReleaseOptions,
    runner: &'a dyn CommandRunner,
    journal: Journal,
}

impl<'a> Executor<'a> {
    #[must_use]
    pub fn new(options: &'a ReleaseOptions, runner: &'a dyn CommandRunner) -> Self {
        Self {
            options,
            runner,
            journal: Journal::default(),
        }
    }

    /// Runs each step in order, stopping at the first failure.
    ///
    /// Files rewritten before the failure are restored to their original
    /// content before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the failing step's error.
    pub async fn execute(mut self, sequence: &Sequence) -> Result<()> {
        for step in sequence.steps() {
            info!(step = %step.kind(), "running step");
            if let Err(err) = self.run_step(step.kind()).await {
                if !self.journal.is_empty() {
                    warn!("Did not execute commands. Resetting version.");
                    self.journal.rollback().await;
                }
                return Err(err);
            }
        }
        Ok(())
    }

    async fn run_step(&mut self, kind: StepKind) -> Result<()> {
        match kind {
            StepKind::CheckClean => self.check_clean().await,
            StepKind::Sync => self.sync().await,
            StepKind::WriteVersion => self.write_version().await,
            StepKind::Extras => self.rewrite_extras().await,
            StepKind::Release => self.release().await,
        }
    }

    async fn check_clean(&self) -> Result<()> {
        let root = &self.options.root;
        ensure_repository(root)?;

        let output = self.runner.run(&cmd::status(), root).await?;
        let lines = dirty_lines(output.stdout(), &self.options.bump_set());
        if !lines.is_empty() {
            return Err(GitError::UncommittedChanges { lines }.into());
        }
        Ok(())
    }

    async fn sync(&self) -> Result<()> {
        let pull = cmd::pull(self.options.autostash);
        self.runner
            .run(&pull, &self.options.root)
            .await
            .with_context(|| format!("cannot sync with the remote ({pull})"))?;
        info!("Executed {pull}");
        Ok(())
    }

    async fn write_version(&mut self) -> Result<()> {
        for file in &self.options.files {
            let path = self.options.root.join(file);
            let original = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            self.journal.record(path.clone(), original);
            manifest::write_version(&path, &self.options.new_version).await?;
        }
        Ok(())
    }

    async fn rewrite_extras(&mut self) -> Result<()> {
        for extra in &self.options.extras {
            if let Some(original) =
                extras::rewrite_file(&self.options.root, extra, &self.options.new_version).await?
            {
                self.journal
                    .record(self.options.root.join(&extra.file), original);
            }
        }
        Ok(())
    }

    async fn release(&self) -> Result<()> {
        for command in release_commands(self.options) {
            self.runner
                .run(&command, &self.options.root)
                .await
                .with_context(|| format!("release command failed: {command}"))?;
            info!("Executed {command}");
        }
        Ok(())
    }
}
