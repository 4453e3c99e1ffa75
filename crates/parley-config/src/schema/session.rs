//! Conversation session settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi! I'm Parley. ☀️\n\n\
Ask me anything, or switch to the Image Generator persona and describe a picture. \
Generated images can be saved with `/save`. 💾";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of prior turns replayed with each request (valid range: 0-50).
    pub context_window: u32,
    /// Append the current local time to the persona's system instruction.
    pub include_timestamp: bool,
    /// Bot message seeded into a brand-new conversation.
    pub welcome_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            context_window: 5,
            include_timestamp: true,
            welcome_message: DEFAULT_WELCOME_MESSAGE.into(),
        }
    }
}
