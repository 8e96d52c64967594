// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional TOML config file(s) (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --log-file FILE   ← Also log to FILE
//! --print-config    ← Show effective options and exit
//!
//! Precedence: CLI flags > UMP_* env > --config > ump.toml > .umprc > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Prints the effective options and the config files they came from.
    #[arg(long = "print-config")]
    pub print_config: bool,
}
