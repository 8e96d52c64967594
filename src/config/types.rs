// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ump.
//!
//! # Config Structure
//!
//! ```text
//! Config: files, extras, message, release, publish, autostash,
//!         skip_pull, registry, publish_flags, regex
//! ExtraTarget: "path" | { file, prefix?, replaced?, flags? }
//! PublishFlag: bool | integer | string
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Manifest bumped when no file list is given.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Commit and tag message template; `%s` becomes the new version.
pub const DEFAULT_MESSAGE: &str = "Release %s";

/// Context that must precede a version token in an extras file.
///
/// Matches `- v1.2.3` banners and `version: "1.2.3"` / `"version": "1.2.3"` pairs.
pub const DEFAULT_REGEX_PREFIX: &str = r#"(?:-\sv|version['"]?:\s*['"])"#;

/// Generic version-shaped token.
pub const DEFAULT_REGEX_REPLACE: &str = r"(?:[0-9]+\.){2}[0-9]+[0-9a-zA-Z\-_\+\.]*";

/// Regex flags applied when an extras entry sets none.
pub const DEFAULT_REGEX_FLAGS: &str = "g";

/// Registry client invoked for `publish`.
pub const DEFAULT_REGISTRY: &str = "npm";

/// Default patterns for extras rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegexDefaults {
    /// Pattern for the context captured before the version (group 1).
    pub prefix: String,
    /// Pattern for the version token itself (group 2).
    pub replace: String,
    /// JavaScript-style flags (`g`, `i`, `m`, `s`, `u`).
    pub flags: String,
}

impl Default for RegexDefaults {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_REGEX_PREFIX.to_string(),
            replace: DEFAULT_REGEX_REPLACE.to_string(),
            flags: DEFAULT_REGEX_FLAGS.to_string(),
        }
    }
}

/// One extras entry: a bare path, or a path with pattern overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraTarget {
    Path(String),
    Detailed(ExtraPattern),
}

/// Extras entry with per-file overrides; unset fields use [`RegexDefaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraPattern {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl ExtraTarget {
    /// Path of the file this entry rewrites.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::Path(file) => file,
            Self::Detailed(pattern) => &pattern.file,
        }
    }

    /// Flags set on this entry, if any.
    #[must_use]
    pub fn flags(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Detailed(pattern) => pattern.flags.as_deref(),
        }
    }
}

impl From<&str> for ExtraTarget {
    fn from(file: &str) -> Self {
        Self::Path(file.to_string())
    }
}

/// Value of a registry publish flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishFlag {
    Switch(bool),
    Number(i64),
    Text(String),
}

impl fmt::Display for PublishFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(on) => write!(f, "{on}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Checks that every character of `flags` is a supported regex flag.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming the first unsupported flag.
pub fn validate_regex_flags(key: &str, flags: &str) -> std::result::Result<(), ConfigError> {
    match flags.chars().find(|c| !matches!(c, 'g' | 'i' | 'm' | 's' | 'u')) {
        Some(flag) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("unsupported regex flag '{flag}' (expected any of g, i, m, s, u)"),
        }),
        None => Ok(()),
    }
}
