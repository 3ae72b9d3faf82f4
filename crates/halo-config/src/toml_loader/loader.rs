//! Core TOML config loading: read from path or platform default.

use crate::schema::HaloConfig;
use crate::validation;
use halo_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Read and parse a TOML file without validating it.
pub(crate) fn read_config(path: &Path) -> Result<HaloConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: HaloConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Read the platform default file, creating it first if it is missing.
pub(crate) fn read_default() -> Result<HaloConfig, ConfigError> {
    let path = default_config_path()?;

    match read_config(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(HaloConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn warn_if_invalid(config: HaloConfig) -> HaloConfig {
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    config
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that parses but
/// fails validation is returned as-is with a warning; `load_config` is the
/// strict entry point.
pub fn load_from_path(path: &Path) -> Result<HaloConfig, ConfigError> {
    read_config(path).map(warn_if_invalid)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/halo/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<HaloConfig, ConfigError> {
    read_default().map(warn_if_invalid)
}
