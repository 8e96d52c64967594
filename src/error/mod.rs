// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        anyhow::Error (Result<T>)
//!                 |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Bump   Git  Process  Manifest Config  Fs
//!
//!   Bump     NoReleaseType, NoSourceFile, NoVersion,
//!            InvalidReleaseType, InvalidVersion
//!   Git      RepoNotFound, UncommittedChanges
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Manifest Read, Parse, NotAnObject
//!   Config   InvalidValue
//!   Fs       IoError
//!
//! Callers recover the typed error with `downcast_ref`.
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Bump (validation) Errors ---

/// The first validation rule a set of release options broke.
///
/// Checked in declaration order; only the first applicable kind is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpErrorKind {
    NoReleaseType,
    NoSourceFile,
    NoVersion,
    InvalidReleaseType,
    InvalidVersion,
}

impl BumpErrorKind {
    /// User-facing message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoReleaseType => "You need to provide a release type",
            Self::NoSourceFile => "The specified source file does not exist.",
            Self::NoVersion => "One or more files do not contain a version property.",
            Self::InvalidReleaseType => {
                "You provided an invalid release type. See semver.org for more information."
            }
            Self::InvalidVersion => "One or more files do not have a valid version.",
        }
    }
}

impl fmt::Display for BumpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validation failure together with the values that caused it.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct BumpError {
    pub kind: BumpErrorKind,
    pub release_type: Option<String>,
    pub source_file: Option<String>,
    pub version: Option<String>,
}

impl BumpError {
    /// Offending field values, in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("release_type", self.release_type.as_deref().unwrap_or("")),
            ("source_file", self.source_file.as_deref().unwrap_or("")),
            ("version", self.version.as_deref().unwrap_or("")),
        ]
    }
}

// --- Git Errors ---

/// Git precondition and command errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No readable `.git` directory or pointer file.
    #[error("You cannot \"release\" this version. You are not in a git repository. ({path})")]
    RepoNotFound { path: String },

    /// Pending changes unrelated to the bump.
    #[error("Git working directory not clean:\n\t{}", .lines.join("\n\t"))]
    UncommittedChanges { lines: Vec<String> },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

// --- Manifest Errors ---

/// JSON manifest errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest could not be read.
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON.
    #[error("failed to parse manifest '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest root is not a JSON object.
    #[error("manifest '{path}' is not a JSON object")]
    NotAnObject { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
