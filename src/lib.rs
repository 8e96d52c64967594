// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              config / bump
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  .umprc, ump.toml, UMP_*  |
//!              '-------------+-------------'
//!                            v
//!                         release
//!        options -> sequence -> executor (rollback)
//!        version   manifest   extras   prompt
//!                            |
//!                            v
//!                  git (commands, status)
//!
//!   +-----------------------------------------+
//!   |  core        process spawning           |
//!   +-----------------------------------------+
//!   |  foundation  error, logging, utility    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod release;
pub mod utility;
