//! Persona selection and user-defined personas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonasConfig {
    /// Persona used when nothing has been persisted yet.
    pub default: String,
    /// Extra personas appended after the built-in ones.
    pub custom: Vec<PersonaEntry>,
}

impl Default for PersonasConfig {
    fn default() -> Self {
        Self {
            default: "all-in-one".into(),
            custom: Vec::new(),
        }
    }
}

/// A persona declared in `[[personas.custom]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaEntry {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    pub system_instruction: String,
}

fn default_emoji() -> String {
    "💬".into()
}
