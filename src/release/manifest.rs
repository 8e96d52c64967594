// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON manifest access.
//!
//! Manifests are rewritten with two-space indentation, original key order,
//! and exactly one trailing newline.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::utility::fs::write::write_atomic_async;

type Object = Map<String, Value>;

fn parse_object(path: &Path, content: &str) -> std::result::Result<Object, ManifestError> {
    match serde_json::from_str(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ManifestError::NotAnObject {
            path: path.display().to_string(),
        }),
        Err(source) => Err(ManifestError::Parse {
            path: path.display().to_string(),
            source,
        }),
    }
}

fn read_object(path: &Path) -> std::result::Result<Object, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_object(path, &content)
}

/// Reads a manifest's `version` string.
///
/// Any read or parse failure, or a non-string `version`, yields `None`.
#[must_use]
pub fn read_version(path: &Path) -> Option<String> {
    match read_object(path) {
        Ok(object) => object.get("version")?.as_str().map(str::to_string),
        Err(e) => {
            debug!(error = %e, "manifest has no readable version");
            None
        }
    }
}

/// Reads a manifest's `name` string.
#[must_use]
pub fn read_name(path: &Path) -> Option<String> {
    read_object(path)
        .ok()?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

/// Renders a manifest the way it is written back to disk.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(object: &Object) -> Result<String> {
    let mut out = serde_json::to_string_pretty(object)?;
    out.push('\n');
    Ok(out)
}

/// Sets `version` in the manifest at `path`, returning the previous value.
///
/// Every other field is preserved in its original position.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, is not a JSON object, or
/// cannot be written back.
pub async fn write_version(path: &Path, version: &str) -> Result<Option<String>> {
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Read {
                path: path.display().to_string(),
                source,
            })?;
    let mut object = parse_object(path, &content)?;

    let previous = object
        .insert("version".to_string(), Value::String(version.to_string()))
        .and_then(|old| old.as_str().map(str::to_string));

    write_atomic_async(path.to_path_buf(), render(&object)?.into_bytes())
        .await
        .with_context(|| format!("failed to write manifest '{}'", path.display()))?;

    debug!(file = %path.display(), from = ?previous, to = %version, "version written");
    Ok(previous)
}
