// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replaces `path` with `contents` through a sibling temp file.
///
/// Readers see either the old or the new file, never a partial write. The
/// original file's permissions are carried over.
///
/// # Errors
///
/// Returns `FsError::IoError` if the temp file cannot be created, written,
/// or renamed over `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let io_err = |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Async wrapper around [`write_atomic`] for use on the runtime.
///
/// # Errors
///
/// Same as [`write_atomic`]; also fails if the blocking task panics.
pub async fn write_atomic_async(path: PathBuf, contents: Vec<u8>) -> Result<()> {
    tokio::task::spawn_blocking(move || write_atomic(&path, &contents)).await?
}
