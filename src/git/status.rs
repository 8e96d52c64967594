// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Porcelain status filtering.
//!
//! ```text
//! " M package.json"        in bump set   -> dropped
//! "?? scratch.txt"         untracked     -> dropped
//! "R  old.js -> new.js"    rename        -> compared as new.js
//! " M src/app.js"          unrelated     -> kept verbatim
//! ```

use crate::utility::fs::walk::normalize_relative;

/// Path a porcelain v1 line refers to; the destination for renames.
#[must_use]
pub fn status_path(line: &str) -> Option<String> {
    let rest = line.get(3..)?;
    let target = rest.rsplit_once(" -> ").map_or(rest, |(_, to)| to);
    Some(normalize_relative(&unquote(target.trim())))
}

/// Strips C-style quoting git applies to unusual paths.
fn unquote(path: &str) -> String {
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('t') => out.push('\t'),
                Some('n') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Status lines for pending changes outside the bump set.
///
/// Untracked entries and entries whose path is in `bump_set` are dropped;
/// both sides are normalized before comparing. Surviving lines are returned
/// as git printed them.
#[must_use]
pub fn dirty_lines<S: AsRef<str>>(porcelain: &str, bump_set: &[S]) -> Vec<String> {
    let bumped: Vec<String> = bump_set
        .iter()
        .map(|file| normalize_relative(file.as_ref()))
        .collect();

    porcelain
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with("??"))
        .filter(|line| status_path(line).is_none_or(|path| !bumped.contains(&path)))
        .map(str::to_string)
        .collect()
}
