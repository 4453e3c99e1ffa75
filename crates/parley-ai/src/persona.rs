//! Persona registry: named system-instruction profiles.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::session::SessionError;

pub const ALL_IN_ONE_ID: &str = "all-in-one";
pub const IMAGE_GEN_ID: &str = "image-gen";

/// A behavior profile applied to every request sent under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub display_name: String,
    pub short_description: String,
    pub emoji: String,
    pub system_instruction: String,
}

fn built_in_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: ALL_IN_ONE_ID.into(),
            display_name: "All-in-One".into(),
            short_description: "A smart assistant for everything.".into(),
            emoji: "✨".into(),
            system_instruction: "You are 'All-in-One', a smart AI assistant. Answer questions \
                concisely and accurately, with tidy formatting."
                .into(),
        },
        Persona {
            id: IMAGE_GEN_ID.into(),
            display_name: "Image Generator".into(),
            short_description: "Creates visuals instantly.".into(),
            emoji: "🎨".into(),
            system_instruction: "You have exactly ONE job: turn the user's request into an \
                IMAGE. When the user asks for an image, reply ONLY in this format: \
                ![Generated Image](https://image.pollinations.ai/prompt/{detailed_english_description}?nologo=true). \
                Do not say anything else."
                .into(),
        },
    ]
}

/// Ordered catalog of personas. Immutable once built.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
    default_index: usize,
}

impl PersonaRegistry {
    /// The built-in personas; `all-in-one` is the default.
    pub fn builtin() -> Self {
        Self {
            personas: built_in_personas(),
            default_index: 0,
        }
    }

    /// Append user-defined personas. Ids must not collide with any
    /// persona already registered.
    pub fn with_custom(
        mut self,
        custom: impl IntoIterator<Item = Persona>,
    ) -> Result<Self, SessionError> {
        for persona in custom {
            if self.get(&persona.id).is_some() {
                return Err(SessionError::DuplicatePersona(persona.id));
            }
            self.personas.push(persona);
        }
        Ok(self)
    }

    /// Choose the default persona by id. Unknown ids keep the current default.
    pub fn with_default(mut self, id: &str) -> Self {
        match self.personas.iter().position(|p| p.id == id) {
            Some(index) => self.default_index = index,
            None => warn!(persona = id, "unknown default persona, keeping built-in default"),
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn default_persona(&self) -> &Persona {
        &self.personas[self.default_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
