// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Regex rewriting of version strings in non-JSON files.
//!
//! ```text
//! (?flags)(<prefix>)(<replaced>)
//!          group 1   group 2
//!             |         |
//!             v         v
//!   "// lib - v" "1.0.0"  -->  "// lib - v" + new_version
//! ```

use std::path::Path;

use regex::{Captures, Regex};
use tracing::debug;

use crate::config::types::{ExtraTarget, RegexDefaults};
use crate::error::{ConfigError, FsError, Result};
use crate::utility::fs::write::write_atomic_async;

/// One resolved extras file with its effective pattern parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraRewrite {
    pub file: String,
    pub prefix: String,
    pub replaced: String,
    pub flags: String,
}

impl ExtraRewrite {
    /// Fills unset pattern parts of `target` from `defaults`, for `file`.
    #[must_use]
    pub fn from_target(target: &ExtraTarget, file: String, defaults: &RegexDefaults) -> Self {
        match target {
            ExtraTarget::Path(_) => Self {
                file,
                prefix: defaults.prefix.clone(),
                replaced: defaults.replace.clone(),
                flags: defaults.flags.clone(),
            },
            ExtraTarget::Detailed(pattern) => Self {
                file,
                prefix: pattern
                    .prefix
                    .clone()
                    .unwrap_or_else(|| defaults.prefix.clone()),
                replaced: pattern
                    .replaced
                    .clone()
                    .unwrap_or_else(|| defaults.replace.clone()),
                flags: pattern
                    .flags
                    .clone()
                    .unwrap_or_else(|| defaults.flags.clone()),
            },
        }
    }

    /// Whether every match is replaced (`g`) or only the first.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }

    /// Compiles `(prefix)(replaced)` with the inline flags this entry maps to.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported flags or an invalid pattern.
    pub fn compile(&self) -> Result<Regex> {
        let mut inline = String::new();
        for flag in self.flags.chars() {
            match flag {
                'i' | 'm' | 's' => inline.push(flag),
                'g' | 'u' => {}
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: format!("extras[{}].flags", self.file),
                        message: format!("unsupported regex flag '{other}'"),
                    }
                    .into());
                }
            }
        }

        let mut pattern = String::new();
        if !inline.is_empty() {
            pattern.push_str(&format!("(?{inline})"));
        }
        pattern.push_str(&format!("({})({})", self.prefix, self.replaced));

        Ok(Regex::new(&pattern)?)
    }

    /// Replaces each version token in `content`, keeping its prefix.
    ///
    /// Returns `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn apply(&self, content: &str, new_version: &str) -> Result<Option<String>> {
        let regex = self.compile()?;
        if !regex.is_match(content) {
            return Ok(None);
        }

        let replacer = |caps: &Captures<'_>| format!("{}{new_version}", &caps[1]);
        let replaced = if self.is_global() {
            regex.replace_all(content, replacer)
        } else {
            regex.replace(content, replacer)
        };
        Ok(Some(replaced.into_owned()))
    }
}

/// Rewrites one extras file in place, returning its original content when
/// the file changed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or the pattern is
/// invalid.
pub async fn rewrite_file(
    root: &Path,
    extra: &ExtraRewrite,
    new_version: &str,
) -> Result<Option<String>> {
    let path = root.join(&extra.file);
    let original = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;

    match extra.apply(&original, new_version)? {
        Some(updated) => {
            write_atomic_async(path, updated.into_bytes()).await?;
            debug!(file = %extra.file, "extras rewritten");
            Ok(Some(original))
        }
        None => {
            debug!(file = %extra.file, "no version token matched");
            Ok(None)
        }
    }
}
