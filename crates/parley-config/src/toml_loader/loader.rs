//! Reading config files. Validation happens in `load_config`, not here, so
//! these functions only fail on missing or malformed files.

use std::io::ErrorKind;
use std::path::Path;

use parley_common::ConfigError;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};
use crate::schema::ParleyConfig;

/// Parse TOML text. Missing sections and keys take their defaults.
pub fn load_from_str(content: &str) -> Result<ParleyConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))
}

/// Read and parse the file at `path`.
pub fn load_from_path(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io(format!("cannot read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Read the config at the platform default path, writing the commented
/// template there first if nothing exists yet.
pub fn load_default() -> Result<ParleyConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config yet, writing the default");
            create_default_config(&path)?;
            Ok(ParleyConfig::default())
        }
        other => other,
    }
}
