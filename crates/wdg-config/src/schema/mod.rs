//! Configuration schema types for wdg.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod colors;
mod logging;
mod window;

pub use colors::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WdgConfig {
    pub colors: ColorsConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
