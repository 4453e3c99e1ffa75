//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the built-in behavior.

mod gemini;
mod personas;
mod session;
mod storage;
mod system;

pub use gemini::*;
pub use personas::*;
pub use session::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Parley.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub gemini: GeminiSchemaConfig,
    pub session: SessionConfig,
    pub personas: PersonasConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}
