//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod globe;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::GlobeAppConfig;
use globe_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlobeAppConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_presence(&mut errors, config);
    globe::validate_globe(&mut errors, config);
    misc::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
