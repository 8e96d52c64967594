// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release types and semantic-version increments.
//!
//! ```text
//! 1.2.3        major      2.0.0
//! 1.2.3        minor      1.3.0
//! 1.2.3        patch      1.2.4
//! 1.2.3        premajor   2.0.0-0
//! 1.2.3        preminor   1.3.0-0
//! 1.2.3        prepatch   1.2.4-0
//! 2.0.0-beta   major      2.0.0
//! 1.2.4-0      patch      1.2.4
//! 1.2.3        4.0.0-rc.1 4.0.0-rc.1 (literal)
//! ```

use std::fmt;
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease, Version};

/// Semver increment kinds accepted as a release type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseKind {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
}

impl ReleaseKind {
    pub const ALL: [Self; 6] = [
        Self::Major,
        Self::Minor,
        Self::Patch,
        Self::Premajor,
        Self::Preminor,
        Self::Prepatch,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Premajor => "premajor",
            Self::Preminor => "preminor",
            Self::Prepatch => "prepatch",
        }
    }

    /// Applies this increment to `current`, dropping build metadata.
    ///
    /// Returns `None` when the incremented component would overflow.
    #[must_use]
    pub fn apply(self, current: &Version) -> Option<Version> {
        let mut next = current.clone();
        next.build = BuildMetadata::EMPTY;
        let was_pre = !next.pre.is_empty();
        next.pre = Prerelease::EMPTY;

        match self {
            Self::Major => {
                // 2.0.0-beta is already the pending major
                if !(was_pre && next.minor == 0 && next.patch == 0) {
                    next.major = next.major.checked_add(1)?;
                }
                next.minor = 0;
                next.patch = 0;
            }
            Self::Minor => {
                if !(was_pre && next.patch == 0) {
                    next.minor = next.minor.checked_add(1)?;
                }
                next.patch = 0;
            }
            Self::Patch => {
                if !was_pre {
                    next.patch = next.patch.checked_add(1)?;
                }
            }
            Self::Premajor => {
                next.major = next.major.checked_add(1)?;
                next.minor = 0;
                next.patch = 0;
                next.pre = first_prerelease();
            }
            Self::Preminor => {
                next.minor = next.minor.checked_add(1)?;
                next.patch = 0;
                next.pre = first_prerelease();
            }
            Self::Prepatch => {
                next.patch = next.patch.checked_add(1)?;
                next.pre = first_prerelease();
            }
        }
        Some(next)
    }
}

fn first_prerelease() -> Prerelease {
    Prerelease::new("0").unwrap_or_default()
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

/// What the caller asked for: an increment, or an explicit version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseType {
    Increment(ReleaseKind),
    /// Used verbatim; never compared against the current version.
    Literal(String),
}

impl ReleaseType {
    /// Classifies `input`, or `None` when it is neither an increment kind
    /// nor a valid semantic version.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if let Ok(kind) = input.parse() {
            return Some(Self::Increment(kind));
        }
        parse_lenient(input).map(|_| Self::Literal(input.to_string()))
    }

    /// Computes the target version from the current one.
    ///
    /// Returns `None` when an increment is requested and `current` is not a
    /// valid semantic version, or cannot be incremented without overflow.
    #[must_use]
    pub fn next_version(&self, current: &str) -> Option<String> {
        match self {
            Self::Increment(kind) => {
                parse_lenient(current)
                    .and_then(|version| kind.apply(&version))
                    .map(|version| version.to_string())
            }
            Self::Literal(version) => Some(version.clone()),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment(kind) => kind.fmt(f),
            Self::Literal(version) => f.write_str(version),
        }
    }
}

/// Parses a version the way npm tooling writes them.
///
/// Surrounding whitespace and a single leading `v` or `=` are accepted.
#[must_use]
pub fn parse_lenient(input: &str) -> Option<Version> {
    let trimmed = input.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('='))
        .unwrap_or(trimmed);
    Version::parse(bare).ok()
}
