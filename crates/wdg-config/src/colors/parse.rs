//! Internal color parsing helpers.

use std::sync::LazyLock;

use regex::Regex;
use wdg_common::TerminalColor;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

/// Regex for a palette index.
pub(crate) static INDEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}$").expect("index pattern is valid"));

const ANSI_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<TerminalColor> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = channel(0..1)?;
            let g = channel(1..2)?;
            let b = channel(2..3)?;
            Some(TerminalColor::Rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(TerminalColor::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

/// Resolve `default`, an ANSI name or its bright variant.
pub(super) fn named_color(s: &str) -> Option<TerminalColor> {
    let name = s.to_ascii_lowercase();
    if name == "default" {
        return Some(TerminalColor::Default);
    }
    let (base, offset) = match name
        .strip_prefix("bright-")
        .or_else(|| name.strip_prefix("bright_"))
        .or_else(|| name.strip_prefix("bright"))
    {
        Some(rest) => (rest, 8),
        None => (name.as_str(), 0),
    };
    let base = match base {
        "grey" | "gray" => "white",
        other => other,
    };
    ANSI_NAMES
        .iter()
        .position(|&n| n == base)
        .map(|index| TerminalColor::Indexed(index as u8 + offset))
}
