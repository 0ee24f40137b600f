//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use tracing::{debug, info};
use wdg_common::ConfigError;

use super::paths::default_config_path;
use crate::schema::WdgConfig;

/// Parse a config from TOML text. Missing fields take their defaults.
pub fn load_from_str(content: &str) -> Result<WdgConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// The result is not validated; see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<WdgConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path, or the defaults
/// when no file exists there.
pub fn load_default() -> Result<WdgConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        debug!("no config found at {}, using defaults", path.display());
        return Ok(WdgConfig::default());
    }

    load_from_path(&path)
}
