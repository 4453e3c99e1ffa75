//! Model provider configuration.

use serde::{Deserialize, Serialize};

/// Gemini (Generative Language API) settings.
///
/// The API key is normally taken from `GEMINI_API_KEY`; `api_key` here is
/// only a fallback for setups without environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSchemaConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Maximum output tokens per reply (valid range: 1-65536).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Request timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
}

impl Default for GeminiSchemaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}
