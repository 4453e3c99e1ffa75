//! Conversation core for Parley.
//!
//! Provides:
//! - The `ModelGateway` contract and a Gemini implementation
//! - The persona registry
//! - Key/value persistence of the conversation
//! - The `SessionManager`, which owns the message log, builds the bounded
//!   context window and drives one request at a time
//! - Helpers for the image-generation reply convention

pub mod context;
pub mod gemini;
pub mod message;
pub mod persona;
pub mod reply;
pub mod session;
pub mod store;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use message::{ImageAttachment, ImageRef, Message, Sender};
pub use persona::{Persona, PersonaRegistry};
pub use session::{RejectReason, SessionError, SessionManager, SessionOptions, TurnOutcome};
pub use store::{FileStore, MemoryStore, PersistentStore};

/// A hosted model that turns one request into one reply.
///
/// Implementations issue exactly one provider call per `generate` and never
/// retry. Every failure (transport, provider rejection, malformed body) is
/// reported as a `ProviderError`.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ProviderError>;
}

/// Everything sent to the model for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    /// Rendered recent history, `None` when there is nothing to replay.
    pub context: Option<String>,
    pub user_text: Option<String>,
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited by the provider, try again later")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("request blocked by the provider: {0}")]
    Blocked(String),
    #[error("request timed out")]
    Timeout,
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
