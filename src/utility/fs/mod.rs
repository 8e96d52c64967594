// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for glob expansion and atomic writes.
//!
//! ```text
//! walk:  expand_glob()     ignore::WalkBuilder + wax matching
//!        expand_all()      ordered, deduplicated expansion
//!        anchor_pattern()  absolute paths rebased onto the root
//! write: write_atomic()  NamedTempFile + persist
//! ```

pub mod walk;
pub mod write;
