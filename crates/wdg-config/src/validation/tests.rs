use super::*;
use crate::schema::ColorPairConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate(&WdgConfig::default()).is_ok());
}

#[test]
fn bad_color_is_reported_with_its_path() {
    let mut config = WdgConfig::default();
    config.colors.focus = ColorPairConfig::new("yellow", "ultraviolet");
    let err = validate(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("colors.focus.bg"));
    assert!(msg.contains("ultraviolet"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = WdgConfig::default();
    config.colors.border.fg = "nope".into();
    config.colors.window.bg = "#12345".into();
    config.window.quit_key = ' ';
    config.window.title = "bad\ttitle".into();

    let err = validate(&config).unwrap_err();
    let ConfigError::ValidationError(msg) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(msg.split("; ").count(), 4);
    assert!(msg.contains("colors.border.fg"));
    assert!(msg.contains("colors.window.bg"));
    assert!(msg.contains("window.quit_key"));
    assert!(msg.contains("window.title"));
}

#[test]
fn non_ascii_quit_key_is_fine() {
    let mut config = WdgConfig::default();
    config.window.quit_key = 'é';
    assert!(validate(&config).is_ok());
}
