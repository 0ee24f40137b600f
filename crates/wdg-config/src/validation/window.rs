//! Window default validation.

use crate::schema::WdgConfig;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WdgConfig) {
    let window = &config.window;

    if window.title.chars().any(char::is_control) {
        errors.push("window.title must not contain control characters".into());
    }

    if window.quit_key.is_control() || window.quit_key.is_whitespace() {
        errors.push(format!(
            "window.quit_key = {:?} must be a printable character",
            window.quit_key
        ));
    }
}
