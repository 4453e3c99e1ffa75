//! Turns the loaded config into the pieces a session is built from.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parley_ai::{
    FileStore, GeminiClient, GeminiConfig, GenerateRequest, MemoryStore, ModelGateway, Persona,
    PersonaRegistry, PersistentStore, ProviderError, SessionOptions,
};
use parley_config::schema::{
    GeminiSchemaConfig, PersonaEntry, PersonasConfig, SessionConfig, StorageConfig,
};

/// Where the conversation lives.
pub fn open_store(
    storage: &StorageConfig,
    ephemeral: bool,
    data_dir: Option<PathBuf>,
) -> Arc<dyn PersistentStore> {
    if ephemeral || storage.ephemeral {
        tracing::info!("Ephemeral session, nothing will be persisted");
        return Arc::new(MemoryStore::new());
    }

    let dir = data_dir
        .or_else(|| storage.directory.clone())
        .map(Ok)
        .unwrap_or_else(parley_platform::session_dir);
    match dir {
        Ok(dir) => {
            tracing::info!("Session stored in {}", dir.display());
            Arc::new(FileStore::new(dir))
        }
        Err(e) => {
            tracing::warn!("No session directory ({e}), falling back to memory");
            Arc::new(MemoryStore::new())
        }
    }
}

fn persona_from_entry(entry: &PersonaEntry) -> Persona {
    Persona {
        id: entry.id.clone(),
        display_name: entry.display_name.clone(),
        short_description: entry.short_description.clone(),
        emoji: entry.emoji.clone(),
        system_instruction: entry.system_instruction.clone(),
    }
}

/// Built-in personas plus the configured custom ones.
///
/// A custom persona that collides with a registered id drops all custom
/// personas rather than shadowing a built-in one.
pub fn persona_registry(config: &PersonasConfig) -> PersonaRegistry {
    let registry = PersonaRegistry::builtin()
        .with_custom(config.custom.iter().map(persona_from_entry))
        .unwrap_or_else(|e| {
            tracing::warn!("Ignoring custom personas: {e}");
            PersonaRegistry::builtin()
        });
    registry.with_default(&config.default)
}

pub fn session_options(config: &SessionConfig) -> SessionOptions {
    SessionOptions {
        context_window: config.context_window as usize,
        include_timestamp: config.include_timestamp,
        welcome_message: config.welcome_message.clone(),
    }
}

/// The Gemini gateway, or a stand-in that reports why it is unavailable.
///
/// A missing key is not fatal: the conversation still loads and every send
/// produces an error turn explaining what to configure.
pub fn model_gateway(config: &GeminiSchemaConfig) -> (Arc<dyn ModelGateway>, Option<String>) {
    let client = GeminiConfig::from_env(config.api_key.as_deref()).and_then(|cfg| {
        GeminiClient::new(
            cfg.with_model(config.model.clone())
                .with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_timeout(Duration::from_secs(u64::from(config.timeout_secs))),
        )
    });

    match client {
        Ok(client) => {
            tracing::info!("Gemini model: {}", client.model());
            (Arc::new(client), None)
        }
        Err(e) => {
            tracing::warn!("Model gateway unavailable: {e}");
            let notice = e.to_string();
            (Arc::new(UnconfiguredGateway(e)), Some(notice))
        }
    }
}

/// Answers every request with the error that kept the real gateway from
/// being built.
struct UnconfiguredGateway(ProviderError);

#[async_trait]
impl ModelGateway for UnconfiguredGateway {
    async fn generate(&self, _request: &GenerateRequest) -> Result<String, ProviderError> {
        Err(self.0.clone())
    }
}
