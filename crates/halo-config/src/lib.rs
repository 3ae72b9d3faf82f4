//! Halo configuration system.
//!
//! TOML-based configuration for the bloom effect with validation. All
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use halo_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::HaloConfig;
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use toml_writer::save_config_to_path;

use halo_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`,
/// and validate the result. Validation failures are returned, not logged.
pub fn load_config(path: Option<&Path>) -> Result<HaloConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::read_config(path)?,
        None => toml_loader::read_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HaloConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

// =============================================================================
// Tests
// =============================================================================
