//! Color parsing and validation.
//!
//! Supports `default`, the ANSI color names (with `bright-` variants), a
//! palette index `0`-`255`, and `#RRGGBB` / `#RGB`.

mod parse;


use wdg_common::{ConfigError, TerminalColor};

use parse::{named_color, parse_hex, HEX_RE, INDEX_RE};

/// Parse a color string into a [`TerminalColor`].
///
/// Accepted formats:
/// - `default` (the terminal's own foreground or background)
/// - `red`, `bright-red`, ... (also `bright_red`, `brightred`, `grey`)
/// - `0`-`255` (palette index)
/// - `#RRGGBB` / `#RGB` (e.g. `#00d4ff`)
pub fn parse_color(s: &str) -> Result<TerminalColor, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if INDEX_RE.is_match(s) {
        return s
            .parse::<u8>()
            .map(TerminalColor::Indexed)
            .map_err(|_| ConfigError::ParseError(format!("color index out of range: {s}")));
    }

    named_color(s).ok_or_else(|| ConfigError::ParseError(format!("unrecognized color: {s}")))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    parse_color(s).is_ok()
}
