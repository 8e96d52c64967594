// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release option resolution.
//!
//! ```text
//! Config (defaults < rc files < toml < env)
//!        \
//!         +--> merge <-- ReleaseRequest (call time)
//!                |
//!                v
//!   expand globs, read source version
//!                |
//!                v
//!   validate (first failure wins) --> BumpError
//!                |
//!                v
//!          ReleaseOptions
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::config::types::{DEFAULT_MANIFEST, ExtraTarget, PublishFlag};
use crate::error::{BumpError, BumpErrorKind, Result};
use crate::git::cmd::render_message;
use crate::utility::fs::walk::{anchor_pattern, expand_all, expand_glob, is_glob};

use super::extras::ExtraRewrite;
use super::manifest;
use super::version::ReleaseType;

/// Options supplied at call time; `None` defers to configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub release_type: Option<String>,
    /// Manifest globs; empty defers to configuration.
    pub files: Vec<String>,
    pub extras: Option<Vec<ExtraTarget>>,
    pub message: Option<String>,
    pub release: Option<bool>,
    pub publish: Option<bool>,
    pub autostash: Option<bool>,
    pub skip_pull: Option<bool>,
    /// Plan only; never touch files or run commands.
    pub debug: bool,
    /// Merged over configured publish flags.
    pub publish_flags: BTreeMap<String, PublishFlag>,
}

/// Fully resolved and validated options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOptions {
    pub release_type: ReleaseType,
    /// Directory all relative paths resolve against.
    pub root: PathBuf,
    /// Manifests in first-seen order; `files[0]` is the version source.
    pub files: Vec<String>,
    pub extras: Vec<ExtraRewrite>,
    pub message: String,
    pub release: bool,
    pub publish: bool,
    pub autostash: bool,
    pub skip_pull: bool,
    pub debug: bool,
    pub registry: String,
    pub publish_flags: BTreeMap<String, PublishFlag>,
    pub current_version: String,
    pub new_version: String,
    /// `name` of the source manifest, if any.
    pub package_name: Option<String>,
}

impl ReleaseOptions {
    /// Resolves `request` over `config` for the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns a [`BumpError`] for the first failed validation rule, or an
    /// error if a glob pattern is invalid.
    pub fn resolve(request: ReleaseRequest, config: &Config, root: &Path) -> Result<Self> {
        let patterns = if request.files.is_empty() {
            config.files.clone()
        } else {
            request.files
        };
        let patterns = if patterns.is_empty() {
            vec![DEFAULT_MANIFEST.to_string()]
        } else {
            patterns
        };
        let files = expand_all(root, &patterns)?;
        let source_file = files.first().cloned();

        let extra_targets = request.extras.unwrap_or_else(|| config.extras.clone());
        let extras = resolve_extras(&extra_targets, config, root)?;

        let current_version = source_file
            .as_deref()
            .and_then(|file| manifest::read_version(&root.join(file)));

        debug!(
            files = ?files,
            source = ?source_file,
            version = ?current_version,
            "resolved release inputs"
        );

        let fail = |kind| BumpError {
            kind,
            release_type: request.release_type.clone(),
            source_file: source_file.clone(),
            version: current_version.clone(),
        };

        let Some(raw_type) = request.release_type.as_deref() else {
            return Err(fail(BumpErrorKind::NoReleaseType).into());
        };
        let Some(source) = source_file.as_deref() else {
            return Err(fail(BumpErrorKind::NoSourceFile).into());
        };
        let Some(current) = current_version.as_deref() else {
            return Err(fail(BumpErrorKind::NoVersion).into());
        };
        let Some(release_type) = ReleaseType::parse(raw_type) else {
            return Err(fail(BumpErrorKind::InvalidReleaseType).into());
        };
        let Some(new_version) = release_type.next_version(current) else {
            return Err(fail(BumpErrorKind::InvalidVersion).into());
        };

        let publish = request.publish.unwrap_or(config.publish);
        let mut publish_flags = config.publish_flags.clone();
        publish_flags.extend(request.publish_flags);

        Ok(Self {
            package_name: manifest::read_name(&root.join(source)),
            release_type,
            root: root.to_path_buf(),
            files,
            extras,
            message: request.message.unwrap_or_else(|| config.message.clone()),
            release: publish || request.release.unwrap_or(config.release),
            publish,
            autostash: request.autostash.unwrap_or(config.autostash),
            skip_pull: request.skip_pull.unwrap_or(config.skip_pull),
            debug: request.debug,
            registry: config.registry.clone(),
            publish_flags,
            current_version: current.to_string(),
            new_version,
        })
    }

    /// Commit and tag message with the new version substituted.
    #[must_use]
    pub fn commit_message(&self) -> String {
        render_message(&self.message, &self.new_version)
    }

    /// Extras file paths in list order.
    #[must_use]
    pub fn extra_files(&self) -> Vec<String> {
        self.extras.iter().map(|extra| extra.file.clone()).collect()
    }

    /// Every file this run rewrites: manifests, then extras, without repeats.
    #[must_use]
    pub fn bump_set(&self) -> Vec<String> {
        let mut set = self.files.clone();
        for file in self.extra_files() {
            if !set.contains(&file) {
                set.push(file);
            }
        }
        set
    }

    /// Whether the source manifest names a scoped (`@scope/name`) package.
    #[must_use]
    pub fn is_scoped_package(&self) -> bool {
        self.package_name
            .as_deref()
            .is_some_and(|name| name.starts_with('@'))
    }
}

/// Expands extras globs; literal paths are kept even when missing so the
/// rewrite step reports them.
fn resolve_extras(
    targets: &[ExtraTarget],
    config: &Config,
    root: &Path,
) -> Result<Vec<ExtraRewrite>> {
    let mut extras: Vec<ExtraRewrite> = Vec::new();
    for target in targets {
        let files = if is_glob(target.file()) {
            expand_glob(root, target.file())?
        } else {
            vec![anchor_pattern(root, target.file())]
        };
        for file in files {
            if extras.iter().any(|extra| extra.file == file) {
                continue;
            }
            extras.push(ExtraRewrite::from_target(target, file, &config.regex));
        }
    }
    Ok(extras)
}
