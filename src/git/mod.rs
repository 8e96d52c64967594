// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git plumbing for releases.
//!
//! ```text
//!   discovery.rs      status.rs          cmd.rs
//!   .git present?     porcelain filter   command lines
//!        \                |                 /
//!         v               v                v
//!      ,--------------------------------------,
//!      |  release::sequence (CheckClean,      |
//!      |  Sync, Release steps)                |
//!      '------------------+-------------------'
//!                         |
//!                         v
//!                CommandRunner --> git CLI
//! ```
//!
//! No git library is linked; every mutation is a `git` subprocess.

pub mod cmd;
pub mod discovery;
pub mod status;

#[cfg(test)]
mod tests;
