//! Key/value persistence of the conversation.
//!
//! The session manager writes two independent entries: the message log and
//! the selected persona id. Values are JSON strings; the store itself is
//! format-agnostic.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use parley_common::StoreError;

/// Key of the serialized message log.
pub const HISTORY_KEY: &str = "chat_history";
/// Key of the serialized selected persona id.
pub const PERSONA_KEY: &str = "chat_persona";

/// Synchronous string store scoped to the local user.
pub trait PersistentStore: Send + Sync {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
