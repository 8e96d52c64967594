// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(6), None);
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        ["off", "error", "warn", "info", "debug", "trace"]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_timestamps());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder_overrides() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("logs/ump.log".to_string())
        .build();
    assert_eq!(config.console_level().as_u8(), 4);
    assert_eq!(config.log_file(), Some("logs/ump.log"));
}
