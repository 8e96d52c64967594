// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config layers --> --print-config | bump
//! ```

use std::process::ExitCode;

use anyhow::Context;
use ump::cli::{self, Cli};
use ump::cli::global::GlobalOptions;
use ump::cmd::bump::{report_error, run_bump_command};
use ump::cmd::config::{build_config_loader, home_dir, write_config_report};
use ump::logging::init_logging;
use ump::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);
    let file_level = LogLevel::DEBUG;

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch(cli: &Cli) -> ump::error::Result<()> {
    let root = std::env::current_dir().context("cannot determine the working directory")?;

    let loader = build_config_loader(&cli.global, &root, home_dir().as_deref());
    let loaded_files = loader.format_loaded_files();
    let config = loader.build().context("failed to load config")?;

    if cli.global.print_config {
        return write_config_report(&config, &loaded_files, &mut std::io::stdout());
    }

    run_bump_command(&cli.bump, &config, &root).await
}
