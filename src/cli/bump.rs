// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bump and release arguments.
//!
//! ```text
//! -m "Release %s"     commit/tag message
//! -r                  add, commit, tag, push
//! -p [--access X]     also publish (implies -r)
//! -x, --no-autostash  pull behaviour
//! -d                  print the plan only
//! -y                  no confirmation prompt
//! ```

use std::collections::BTreeMap;

use clap::{Args, ValueEnum};

use crate::config::types::PublishFlag;
use crate::release::options::ReleaseRequest;

/// Publish access level for scoped packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Access {
    Public,
    Restricted,
}

impl Access {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
        }
    }
}

/// Arguments describing one bump.
#[derive(Debug, Clone, Default, Args)]
pub struct BumpArgs {
    /// major, minor, patch, premajor, preminor, prepatch, or an explicit version.
    #[arg(value_name = "RELEASE_TYPE")]
    pub release_type: Option<String>,

    /// Manifest files or globs (default: package.json).
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Commit and tag message; the first %s becomes the new version.
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Commits, tags and pushes the bump.
    #[arg(short = 'r', long)]
    pub release: bool,

    /// Publishes to the registry after releasing.
    #[arg(short = 'p', long)]
    pub publish: bool,

    /// Pulls without --autostash.
    #[arg(long = "no-autostash")]
    pub no_autostash: bool,

    /// Skips the pull before bumping.
    #[arg(short = 'x', long = "skip-pull")]
    pub skip_pull: bool,

    /// Prints the plan without touching anything.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Answers yes to every prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Publish access for scoped packages.
    #[arg(long, value_enum, value_name = "ACCESS")]
    pub access: Option<Access>,
}

impl BumpArgs {
    /// Converts the flags into a request; unset switches defer to config.
    #[must_use]
    pub fn to_request(&self) -> ReleaseRequest {
        let mut publish_flags = BTreeMap::new();
        if let Some(access) = self.access {
            publish_flags.insert(
                "access".to_string(),
                PublishFlag::Text(access.as_str().to_string()),
            );
        }

        ReleaseRequest {
            release_type: self.release_type.clone(),
            files: self.files.clone(),
            extras: None,
            message: self.message.clone(),
            release: self.release.then_some(true),
            publish: self.publish.then_some(true),
            autostash: self.no_autostash.then_some(false),
            skip_pull: self.skip_pull.then_some(true),
            debug: self.debug,
            publish_flags,
        }
    }
}
