// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config loading and display for ump.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Name of the JSON rc file looked up in the home and project directories.
pub const RC_FILE: &str = ".umprc";
/// Name of the project TOML config file.
pub const TOML_FILE: &str = "ump.toml";
/// Prefix of environment overrides (`UMP_MESSAGE`, `UMP_REGEX__FLAGS`).
pub const ENV_PREFIX: &str = "UMP";

/// Home directory from `HOME`, or `USERPROFILE` on Windows.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Stacks every config source, lowest precedence first.
#[must_use]
pub fn build_config_loader(global: &GlobalOptions, root: &Path, home: Option<&Path>) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if let Some(home) = home {
        let home_rc = home.join(RC_FILE);
        if home_rc != root.join(RC_FILE) {
            loader = loader.add_json_file_optional(home_rc);
        }
    }
    loader = loader
        .add_json_file_optional(root.join(RC_FILE))
        .add_toml_file_optional(root.join(TOML_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

/// Writes the effective options, then the files they were read from
/// (as listed by [`ConfigLoader::format_loaded_files`]).
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_config_report(
    config: &Config,
    loaded_files: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    if loaded_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in loaded_files {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
