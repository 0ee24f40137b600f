//! Defaults for newly created windows.

use serde::{Deserialize, Serialize};
use wdg_common::Align;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub align: Align,
    /// Write every received key code into the content area.
    pub echo_keys: bool,
    /// Key that closes the focused window.
    pub quit_key: char,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "wdg".into(),
            align: Align::Center,
            echo_keys: true,
            quit_key: 'q',
        }
    }
}
