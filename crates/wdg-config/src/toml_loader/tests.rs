//! Tests for TOML config loading and path resolution.

use super::*;
use std::path::Path;
use wdg_common::{Align, ConfigError};

use crate::schema::LogLevel;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_wdg_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[colors]
focus = { fg = "#ff0000", bg = "black" }

[window]
title = "Status"
align = "left"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.colors.focus.fg, "#ff0000");
    assert_eq!(config.window.title, "Status");
    assert_eq!(config.window.align, Align::Left);
    // Defaults preserved
    assert_eq!(config.colors.border.fg, "white");
    assert_eq!(config.window.quit_key, 'q');
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn missing_pair_field_takes_default() {
    let config = load_from_str(
        r#"
[colors]
window = { bg = "blue" }
"#,
    )
    .unwrap();
    assert_eq!(config.colors.window.fg, "default");
    assert_eq!(config.colors.window.bg, "blue");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn wrong_types_are_parse_errors() {
    assert!(load_from_str("[window]\necho_keys = \"yes\"").is_err());
    assert!(load_from_str("[window]\nalign = \"middle\"").is_err());
    assert!(load_from_str("[window]\nquit_key = \"quit\"").is_err());
    assert!(load_from_str("[logging]\nlevel = \"loud\"").is_err());
}

#[test]
fn logging_section_parses() {
    let config = load_from_str(
        r#"
[logging]
level = "debug"
file = "/tmp/wdg.log"
"#,
    )
    .unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(
        config.logging.file.as_deref(),
        Some(Path::new("/tmp/wdg.log"))
    );
}

#[test]
fn default_config_path_ends_with_wdg() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("wdg/config.toml"));
    }
}
