//! Write HaloConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a
//! crash mid-write never leaves a truncated config behind.

use std::path::Path;

use halo_common::ConfigError;

use crate::schema::HaloConfig;

/// Write `contents` to `path` through a temporary sibling, creating parent
/// directories as needed.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::write(parent, e))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| ConfigError::write(&tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, contents).map_err(|e| ConfigError::write(path, e))?;
    }
    Ok(())
}

/// Serialize `config` and write it to `path`.
pub fn save_config_to_path(config: &HaloConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str)?;
    tracing::info!("saved config to {}", path.display());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
