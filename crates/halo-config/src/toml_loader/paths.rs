//! Config path resolution and default file creation.

use halo_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;
use crate::toml_writer::write_atomic;

/// `<config_dir>/halo/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("halo").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented default template to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomic(path, default_config_toml())?;
    info!("created default config at {}", path.display());
    Ok(())
}
