mod color;
mod geometry;
mod key;

pub use color::TerminalColor;
pub use geometry::Geometry;
pub use key::Key;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a widget object, assigned by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wdg-{}", self.0)
    }
}

/// Index of a color pair registered on the screen. Pair 0 is the terminal
/// default and can not be redefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PairId(pub u8);

impl PairId {
    pub const DEFAULT: PairId = PairId(0);

    pub fn is_default(self) -> bool {
        self.0 == 0
    }
}

/// Horizontal placement of a title on the top border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl std::str::FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(format!("unknown alignment '{other}'")),
        }
    }
}
