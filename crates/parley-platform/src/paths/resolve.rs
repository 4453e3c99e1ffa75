use std::path::PathBuf;

use parley_common::PlatformError;

pub(super) const APP_NAME: &str = "parley";

/// Returns the platform-specific configuration directory for Parley.
///
/// - macOS: `~/Library/Application Support/parley`
/// - Linux: `$XDG_CONFIG_HOME/parley` (defaults to `~/.config/parley`)
/// - Windows: `%APPDATA%\parley`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Parley.
///
/// - macOS: `~/Library/Application Support/parley`
/// - Linux: `$XDG_DATA_HOME/parley` (defaults to `~/.local/share/parley`)
/// - Windows: `%APPDATA%\parley`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory holding the persisted conversation (`data_dir()/session`).
pub fn session_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("session"))
}

/// Where generated images are saved by default.
///
/// The user's download directory when the platform has one, otherwise
/// `data_dir()/images`.
pub fn download_dir() -> Result<PathBuf, PlatformError> {
    match dirs::download_dir() {
        Some(dir) => Ok(dir.join(APP_NAME).join("images")),
        None => Ok(data_dir()?.join("images")),
    }
}
