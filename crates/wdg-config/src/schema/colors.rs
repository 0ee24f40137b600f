//! Color pair configuration for the four widget roles.

use serde::{Deserialize, Serialize};

/// A foreground/background combination, both given as color strings
/// (see [`crate::colors::parse_color`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPairConfig {
    pub fg: String,
    pub bg: String,
}

impl ColorPairConfig {
    pub fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
        }
    }
}

impl Default for ColorPairConfig {
    fn default() -> Self {
        Self::new("default", "default")
    }
}

/// Colors used when drawing windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Border of an unfocused window.
    pub border: ColorPairConfig,
    /// Border of the focused window.
    pub focus: ColorPairConfig,
    pub title: ColorPairConfig,
    /// Content area background.
    pub window: ColorPairConfig,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            border: ColorPairConfig::new("white", "black"),
            focus: ColorPairConfig::new("yellow", "black"),
            title: ColorPairConfig::new("cyan", "black"),
            window: ColorPairConfig::default(),
        }
    }
}
