//! Color pair validation.

use crate::colors::validate_color;
use crate::schema::{ColorPairConfig, WdgConfig};

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &WdgConfig) {
    let colors = &config.colors;
    validate_pair(errors, "colors.border", &colors.border);
    validate_pair(errors, "colors.focus", &colors.focus);
    validate_pair(errors, "colors.title", &colors.title);
    validate_pair(errors, "colors.window", &colors.window);
}

fn validate_pair(errors: &mut Vec<String>, name: &str, pair: &ColorPairConfig) {
    if !validate_color(&pair.fg) {
        errors.push(format!("{name}.fg = {:?} is not a valid color", pair.fg));
    }
    if !validate_color(&pair.bg) {
        errors.push(format!("{name}.bg = {:?} is not a valid color", pair.bg));
    }
}
