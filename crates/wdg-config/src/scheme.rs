//! Resolution of the configured color strings into terminal colors.

use wdg_common::{ConfigError, TerminalColor};

use crate::colors::parse_color;
use crate::schema::{ColorPairConfig, ColorsConfig};

/// A resolved foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPair {
    pub fg: TerminalColor,
    pub bg: TerminalColor,
}

impl ColorPair {
    pub const fn new(fg: TerminalColor, bg: TerminalColor) -> Self {
        Self { fg, bg }
    }
}

impl TryFrom<&ColorPairConfig> for ColorPair {
    type Error = ConfigError;

    fn try_from(config: &ColorPairConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            fg: parse_color(&config.fg)?,
            bg: parse_color(&config.bg)?,
        })
    }
}

/// The four color pairs a window is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub border: ColorPair,
    pub focus: ColorPair,
    pub title: ColorPair,
    pub window: ColorPair,
}

impl ColorScheme {
    /// Resolve every configured pair. The first unparsable color is
    /// returned as the error.
    pub fn from_config(colors: &ColorsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            border: ColorPair::try_from(&colors.border)?,
            focus: ColorPair::try_from(&colors.focus)?,
            title: ColorPair::try_from(&colors.title)?,
            window: ColorPair::try_from(&colors.window)?,
        })
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            border: ColorPair::new(TerminalColor::WHITE, TerminalColor::BLACK),
            focus: ColorPair::new(TerminalColor::YELLOW, TerminalColor::BLACK),
            title: ColorPair::new(TerminalColor::CYAN, TerminalColor::BLACK),
            window: ColorPair::default(),
        }
    }
}
