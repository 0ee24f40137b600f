//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod colors;
mod window;

#[cfg(test)]
mod tests;

use wdg_common::ConfigError;

use crate::schema::WdgConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WdgConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    colors::validate_colors(&mut errors, config);
    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
