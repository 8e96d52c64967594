// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  expand_glob(), expand_all(), anchor_pattern()
//!   write: write_atomic(), write_atomic_async()
//! ```

pub mod fs;
