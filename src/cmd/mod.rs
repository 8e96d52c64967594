// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::config (load, --print-config)
//!          --> cmd::bump   (resolve, run_release, report)
//! ```

pub mod bump;
pub mod config;

#[cfg(test)]
mod tests;
