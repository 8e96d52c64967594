// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bump command: resolve options, run the release, report the outcome.
//!
//! ```text
//! BumpArgs + Config --> ReleaseOptions::resolve
//!                            |
//!            BumpError <-----+-----> run_release
//!                |                       |
//!     report_bump_error           report_outcome
//!       (exit 1)          DONE / dry run / halted (exit 0)
//! ```

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::bump::BumpArgs;
use crate::config::Config;
use crate::error::{BumpError, BumpErrorKind, Result};
use crate::release::options::ReleaseOptions;
use crate::release::prompt::{AssumeYes, Prompter, TerminalPrompter};
use crate::release::runner::{CommandRunner, ProcessRunner};
use crate::release::{Outcome, run_release};

/// Runs one bump against the project at `root`, printing to stdout.
///
/// # Errors
///
/// Returns the resolution or execution error; see [`report_error`].
pub async fn run_bump_command(args: &BumpArgs, config: &Config, root: &Path) -> Result<()> {
    let prompter: &dyn Prompter = if args.yes { &AssumeYes } else { &TerminalPrompter };
    let mut stdout = std::io::stdout();
    let outcome = execute_bump(args, config, root, prompter, &ProcessRunner, &mut stdout).await?;
    report_outcome(&outcome, &mut stdout)
}

/// Resolves `args` over `config` and runs the release.
///
/// # Errors
///
/// Returns a [`BumpError`] when validation fails, otherwise any error raised
/// while prompting or executing.
pub async fn execute_bump(
    args: &BumpArgs,
    config: &Config,
    root: &Path,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let options = ReleaseOptions::resolve(args.to_request(), config, root)?;
    info!(
        from = %options.current_version,
        to = %options.new_version,
        release = options.release,
        publish = options.publish,
        "bump resolved"
    );
    run_release(options, prompter, runner, out).await
}

/// Writes the closing line for a finished run.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_outcome(outcome: &Outcome, out: &mut dyn Write) -> Result<()> {
    match outcome {
        Outcome::Completed => writeln!(out, "*** DONE! ***")?,
        Outcome::DryRun(_) => writeln!(out, "\nDebug mode: nothing was executed.")?,
        Outcome::Declined => writeln!(out, "\nHalted execution. Not bumping files.")?,
    }
    Ok(())
}

/// Writes a validation failure the way users expect to read it.
///
/// A missing release type only shows the current version; other kinds list
/// the offending values.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_bump_error(err: &BumpError, out: &mut dyn Write) -> Result<()> {
    if err.kind == BumpErrorKind::NoReleaseType {
        writeln!(
            out,
            "\nCURRENT VERSION: {}",
            err.version.as_deref().unwrap_or("unknown")
        )?;
        writeln!(out, "{}", err.kind)?;
        return Ok(());
    }

    writeln!(out, "\n{}", err.kind)?;
    for (key, value) in err.fields() {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}

/// Prints any command error to stderr.
pub fn report_error(err: &anyhow::Error) {
    let mut stderr = std::io::stderr();
    let written = match err.downcast_ref::<BumpError>() {
        Some(bump) => report_bump_error(bump, &mut stderr),
        None => writeln!(stderr, "Error: {err:#}").map_err(Into::into),
    };
    if written.is_err() {
        tracing::error!(error = %err, "could not report error");
    }
}
