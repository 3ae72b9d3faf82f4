//! Full configuration validation.
//!
//! Validates every numeric range. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod bloom;
mod helpers;
mod render;


use crate::schema::HaloConfig;
use halo_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HaloConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    bloom::validate_brightness(&mut errors, config);
    bloom::validate_blur(&mut errors, config);
    bloom::validate_composite(&mut errors, config);
    render::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
