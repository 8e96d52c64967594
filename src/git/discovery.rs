// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository detection.
//!
//! ```text
//! root/.git/        directory  -> .git/config must be readable
//! root/.git         file       -> submodule/worktree pointer must be readable
//! (missing)                    -> RepoNotFound
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::GitError;

/// Confirms `root` is the top of a git work tree.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if neither form of `.git` is readable.
pub fn ensure_repository(root: &Path) -> Result<(), GitError> {
    let dot_git = root.join(".git");
    let marker = if dot_git.is_dir() {
        dot_git.join("config")
    } else {
        dot_git
    };

    std::fs::read(&marker).map(|_| ()).map_err(|e| {
        debug!(path = %marker.display(), error = %e, "git metadata unreadable");
        GitError::RepoNotFound {
            path: root.display().to_string(),
        }
    })
}

/// Whether `root` holds a readable `.git`.
#[must_use]
pub fn is_git_repo(root: &Path) -> bool {
    ensure_repository(root).is_ok()
}
