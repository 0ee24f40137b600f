//! Config path resolution.

use std::path::PathBuf;

use wdg_common::ConfigError;

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/wdg/config.toml`
/// On macOS: `~/Library/Application Support/wdg/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("wdg").join("config.toml"))
}
