// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process plumbing.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   Builder / Output
//!   which lookup cache
//! ```

pub mod process;
