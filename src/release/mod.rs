// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release orchestration.
//!
//! ```text
//! ReleaseRequest + Config
//!          |
//!          v
//!   ReleaseOptions::resolve ----> BumpError (nothing touched)
//!          |
//!          v
//!   summary, access choice (scoped publish)
//!          |
//!          v
//!   Sequence::build --> plan printed
//!          |
//!          +--> debug: Outcome::DryRun
//!          +--> declined: Outcome::Declined
//!          v
//!   tool preflight --> Executor::execute --> Outcome::Completed
//!                              |
//!                              +--> error: rollback, Err
//! ```

pub mod executor;
pub mod extras;
pub mod manifest;
pub mod options;
pub mod prompt;
pub mod runner;
pub mod sequence;
pub mod version;


use std::io::Write;

use crate::config::types::PublishFlag;
use crate::error::{ProcessError, Result};

use executor::Executor;
use options::ReleaseOptions;
use prompt::{ACCESS_CHOICES, ACCESS_MESSAGE, CONFIRM_MESSAGE, Prompter};
use runner::CommandRunner;
use sequence::Sequence;

/// How a release run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every step succeeded.
    Completed,
    /// Plan shown, nothing executed.
    DryRun(Sequence),
    /// The user answered no at the confirmation prompt.
    Declined,
}

/// Writes the files and old/new versions.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_summary(options: &ReleaseOptions, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "SET FILES:\t{}", options.files.join(", "))?;
    writeln!(out, "OLD VERSION:\t{}", options.current_version)?;
    writeln!(out, "NEW VERSION:\t{}", options.new_version)?;
    Ok(())
}

/// Writes the planned steps.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_plan(sequence: &Sequence, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "About to execute the following:")?;
    writeln!(out, "{}", sequence.render())?;
    Ok(())
}

/// Asks for publish access of a scoped package unless already configured.
///
/// # Errors
///
/// Returns an error if the prompt fails.
pub fn choose_access(options: &mut ReleaseOptions, prompter: &dyn Prompter) -> Result<()> {
    if !options.publish
        || !options.is_scoped_package()
        || options.publish_flags.contains_key("access")
    {
        return Ok(());
    }
    let index = prompter.select(ACCESS_MESSAGE, &ACCESS_CHOICES, 0)?;
    let access = ACCESS_CHOICES.get(index).copied().unwrap_or(ACCESS_CHOICES[0]);
    options
        .publish_flags
        .insert("access".to_string(), PublishFlag::Text(access.to_string()));
    Ok(())
}

/// Checks that the programs the plan will run are installed.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` for the first missing program.
pub fn preflight(options: &ReleaseOptions, runner: &dyn CommandRunner) -> Result<()> {
    if !options.release {
        return Ok(());
    }
    let mut programs = vec!["git"];
    if options.publish {
        programs.push(options.registry.as_str());
    }
    for program in programs {
        if !runner.locate(program) {
            return Err(ProcessError::ExecutableNotFound {
                name: program.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Plans and, unless in dry-run or declined, executes a release.
///
/// The summary and plan are written to `out`.
///
/// # Errors
///
/// Returns an error if a prompt fails, a required program is missing, or a
/// step fails (after rolling back rewritten files).
pub async fn run_release(
    mut options: ReleaseOptions,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<Outcome> {
    write_summary(&options, out)?;
    choose_access(&mut options, prompter)?;

    let sequence = Sequence::build(&options);
    write_plan(&sequence, out)?;

    if options.debug {
        return Ok(Outcome::DryRun(sequence));
    }

    if !prompter.confirm(CONFIRM_MESSAGE, true)? {
        return Ok(Outcome::Declined);
    }

    preflight(&options, runner)?;
    Executor::new(&options, runner).execute(&sequence).await?;
    Ok(Outcome::Completed)
}
