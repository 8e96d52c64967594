// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted configuration for ump.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ~/.umprc (JSON)
//! 3. ./.umprc (JSON)
//! 4. ./ump.toml
//! 5. --config FILE
//! 6. UMP_* env vars
//! 7. call-time options (CLI / ReleaseRequest)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! UMP_MESSAGE="v%s"             → message = "v%s"
//! UMP_SKIP_PULL=true            → skip_pull = true
//! UMP_FILES=package.json,a.json → files = ["package.json", "a.json"]
//! UMP_REGEX__FLAGS=gi           → regex.flags = "gi"
//! ```
//!
//! The release type is never read from configuration.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{
    DEFAULT_MESSAGE, DEFAULT_REGISTRY, ExtraTarget, PublishFlag, RegexDefaults,
    validate_regex_flags,
};

/// Complete persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Manifest globs; the first match is the version source.
    pub files: Vec<String>,
    /// Non-JSON files whose embedded version is rewritten.
    pub extras: Vec<ExtraTarget>,
    /// Commit/tag message template.
    pub message: String,
    /// Commit, tag and push after bumping.
    pub release: bool,
    /// Publish to the registry (implies `release`).
    pub publish: bool,
    /// Pass `--autostash` to `git pull --rebase`.
    pub autostash: bool,
    /// Skip the initial `git pull` of a release.
    pub skip_pull: bool,
    /// Registry client program.
    pub registry: String,
    /// Flags rendered onto the publish command.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub publish_flags: BTreeMap<String, PublishFlag>,
    /// Default extras patterns.
    pub regex: RegexDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            extras: Vec::new(),
            message: DEFAULT_MESSAGE.to_string(),
            release: false,
            publish: false,
            autostash: true,
            skip_pull: false,
            registry: DEFAULT_REGISTRY.to_string(),
            publish_flags: BTreeMap::new(),
            regex: RegexDefaults::default(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ump::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_json_file_optional(".umprc")
    ///     .add_toml_file_optional("ump.toml")
    ///     .with_env_prefix("UMP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if a regex flag string contains an unsupported flag.
    pub fn validate(&self) -> Result<()> {
        validate_regex_flags("regex.flags", &self.regex.flags)?;
        for extra in &self.extras {
            if let Some(flags) = extra.flags() {
                validate_regex_flags(&format!("extras[{}].flags", extra.file()), flags)?;
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("files".to_string(), format!("{:?}", self.files));
        options.insert(
            "extras".to_string(),
            format!(
                "{:?}",
                self.extras.iter().map(ExtraTarget::file).collect::<Vec<_>>()
            ),
        );
        options.insert("message".to_string(), self.message.clone());
        options.insert("release".to_string(), self.release.to_string());
        options.insert("publish".to_string(), self.publish.to_string());
        options.insert("autostash".to_string(), self.autostash.to_string());
        options.insert("skip_pull".to_string(), self.skip_pull.to_string());
        options.insert("registry".to_string(), self.registry.clone());
        for (name, value) in &self.publish_flags {
            options.insert(format!("publish_flags.{name}"), value.to_string());
        }
        options.insert("regex.prefix".to_string(), self.regex.prefix.clone());
        options.insert("regex.replace".to_string(), self.regex.replace.clone());
        options.insert("regex.flags".to_string(), self.regex.flags.clone());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
