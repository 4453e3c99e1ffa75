//! Local persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted session. Defaults to the platform
    /// data directory when unset.
    pub directory: Option<PathBuf>,
    /// Keep the session in memory only.
    pub ephemeral: bool,
}
