//! wdg configuration system.
//!
//! Provides TOML-based configuration for window colors, window defaults
//! and logging. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wdg_config::{load_config, ColorScheme};
//!
//! let config = load_config(None).expect("failed to load config");
//! let scheme = ColorScheme::from_config(&config.colors).expect("bad colors");
//! println!("{scheme:?}");
//! ```

pub mod colors;
pub mod schema;
pub mod scheme;
pub mod toml_loader;
pub mod validation;

pub use schema::{ColorPairConfig, ColorsConfig, LogLevel, LoggingConfig, WdgConfig, WindowConfig};
pub use scheme::{ColorPair, ColorScheme};

use std::path::Path;

use wdg_common::ConfigError;

/// Load and validate the config.
///
/// With an explicit `path` the file must exist; otherwise the platform
/// default path is used and a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<WdgConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &WdgConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}
