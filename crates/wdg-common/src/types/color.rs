use serde::{Deserialize, Serialize};

/// A terminal color as understood by the rendering backends.
///
/// Indices 0-7 are the classic ANSI colors (black, red, green, yellow, blue,
/// magenta, cyan, white), 8-15 their bright variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TerminalColor {
    #[default]
    Default,
    Indexed(u8),
    Rgb(u8, u8, u8),
}

impl TerminalColor {
    pub const BLACK: TerminalColor = TerminalColor::Indexed(0);
    pub const RED: TerminalColor = TerminalColor::Indexed(1);
    pub const GREEN: TerminalColor = TerminalColor::Indexed(2);
    pub const YELLOW: TerminalColor = TerminalColor::Indexed(3);
    pub const BLUE: TerminalColor = TerminalColor::Indexed(4);
    pub const MAGENTA: TerminalColor = TerminalColor::Indexed(5);
    pub const CYAN: TerminalColor = TerminalColor::Indexed(6);
    pub const WHITE: TerminalColor = TerminalColor::Indexed(7);
}
