// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Yes/no and choice prompts.

use dialoguer::{Confirm, Select};

use crate::error::Result;

pub const CONFIRM_MESSAGE: &str = "Are you sure you want to continue?";
pub const ACCESS_MESSAGE: &str = "Is access public or restricted?";
pub const ACCESS_CHOICES: [&str; 2] = ["public", "restricted"];

/// Source of user decisions during a release.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `choices`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<usize>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()?)
    }
}

/// Accepts every confirmation and every default choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str, _default: bool) -> Result<bool> {
        Ok(true)
    }

    fn select(&self, _message: &str, _choices: &[&str], default: usize) -> Result<usize> {
        Ok(default)
    }
}
