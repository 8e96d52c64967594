// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::{trace, warn};
use wax::{Glob, Program};

/// Characters that make a path segment a glob rather than a literal.
const GLOB_META: &[char] = &['*', '?', '[', '{', '<', '!'];

/// Directory names never descended into.
const SKIP_DIRS: &[&str] = &[".git"];

/// Walks `base` including dotfiles, without ignore files, skipping [`SKIP_DIRS`].
fn build_walker(base: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(base);
    builder.standard_filters(false);
    builder.filter_entry(|entry| {
        !(entry.depth() > 0
            && entry.file_type().is_some_and(|ft| ft.is_dir())
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIP_DIRS.contains(&name)))
    });
    builder
}

/// Whether `pattern` contains any glob syntax.
#[must_use]
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_META)
}

/// Normalizes a relative path to `/`-separated form without `.` components.
///
/// `./src\lib.js` and `src/./lib.js` both become `src/lib.js`.
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    let unified = path.replace('\\', "/");
    Path::new(&unified)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Rebases `pattern` onto `root`.
///
/// Relative patterns are normalized. Absolute patterns under `root` become
/// relative to it; other absolute patterns stay absolute.
#[must_use]
pub fn anchor_pattern(root: &Path, pattern: &str) -> String {
    let path = Path::new(pattern);
    if !path.is_absolute() {
        return normalize_relative(pattern);
    }
    match path.strip_prefix(root) {
        Ok(rel) => normalize_relative(&rel.to_string_lossy()),
        Err(_) => pattern.replace('\\', "/"),
    }
}

/// Splits a glob into its leading literal directories (with trailing `/`)
/// and the remainder that is matched during the walk.
fn split_glob(pattern: &str) -> (&str, &str) {
    let mut split = 0;
    for (idx, _) in pattern.match_indices('/') {
        if is_glob(&pattern[..idx]) {
            break;
        }
        split = idx + 1;
    }
    pattern.split_at(split)
}

/// Expands `pattern` relative to `root` into matching file paths.
///
/// Literal patterns are returned as-is when the file exists. Glob patterns
/// match dotfiles; results are sorted and `/`-separated. Paths are relative
/// to `root` unless the pattern is absolute and outside it.
///
/// # Errors
///
/// Returns an error if the glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use ump::utility::fs::walk::expand_glob;
///
/// let manifests = expand_glob(Path::new("."), "packages/*/package.json")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<String>> {
    let pattern = anchor_pattern(root, pattern);

    if !is_glob(&pattern) {
        return Ok(if root.join(&pattern).is_file() {
            vec![pattern]
        } else {
            trace!(pattern = %pattern, "no such file");
            Vec::new()
        });
    }

    let (base, rest) = split_glob(&pattern);
    let glob = Glob::new(rest).with_context(|| format!("invalid glob pattern '{pattern}'"))?;

    let walk_root: PathBuf = if base.is_empty() {
        root.to_path_buf()
    } else {
        root.join(base)
    };
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut matches = Vec::new();
    for entry in build_walker(&walk_root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file())
            && let Ok(rel_path) = entry.path().strip_prefix(&walk_root)
            && glob.is_match(rel_path)
        {
            matches.push(format!(
                "{base}{}",
                normalize_relative(&rel_path.to_string_lossy())
            ));
        }
    }

    matches.sort_unstable();
    Ok(matches)
}

/// Expands every pattern in order and drops repeated paths.
///
/// # Errors
///
/// Returns an error if any glob pattern is invalid.
pub fn expand_all<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<Vec<String>> {
    let mut files: Vec<String> = Vec::new();
    for pattern in patterns {
        for file in expand_glob(root, pattern.as_ref())? {
            if !files.contains(&file) {
                files.push(file);
            }
        }
    }
    Ok(files)
}
