use std::fs;

use parley_common::PlatformError;

use super::resolve::{config_dir, data_dir, session_dir};

/// Creates the Parley directories if they do not already exist.
///
/// Creates: config_dir, data_dir and session_dir.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(session_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
