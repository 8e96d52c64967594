// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ump using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ump [global options] [bump options] [RELEASE_TYPE] [FILES]...
//!
//! RELEASE_TYPE  major | minor | patch | premajor | preminor | prepatch | X.Y.Z
//! FILES         manifest globs, first match is the version source
//! ```

pub mod bump;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::bump::BumpArgs;
use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Semantic version bump and release tool.
#[derive(Debug, Parser)]
#[command(
    name = "ump",
    author,
    version,
    about = "Bump the version of JSON manifests and optionally release it",
    long_about = "ump Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Bumps the semantic version of package.json (or the given\n\
                  manifests), rewrites version strings in extra files and, with\n\
                  --release, commits, tags and pushes the result. --publish also\n\
                  publishes the package to the registry.",
    after_help = "CONFIG FILES:\n\n\
                  Options are read from $HOME/.umprc and ./.umprc (JSON), then\n\
                  ./ump.toml, then every --config file in order, then UMP_*\n\
                  environment variables (UMP_REGEX__FLAGS for nested keys). Later\n\
                  sources override earlier ones; command-line flags override all."
)]
pub struct Cli {
    /// Options that control config loading and logging.
    #[command(flatten)]
    pub global: GlobalOptions,

    /// What to bump and how to release it.
    #[command(flatten)]
    pub bump: BumpArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
