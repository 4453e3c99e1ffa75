//! SessionManager struct, restore, persona switching and reset.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use parley_common::MessageIdGen;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::persona::{Persona, PersonaRegistry};
use crate::store::{PersistentStore, HISTORY_KEY, PERSONA_KEY};
use crate::ModelGateway;

use super::types::{SessionError, SessionOptions};

/// Id of the seeded welcome message.
const WELCOME_ID: u64 = 1;

/// Mutable part of the session, always accessed under the lock.
pub(super) struct SessionState {
    pub(super) messages: Vec<Message>,
    pub(super) persona: Persona,
    /// Bumped whenever the log is thrown away, so replies to requests issued
    /// before the reset can be recognized.
    pub(super) epoch: u64,
}

/// Persona entry as stored: either a bare id or a full persona object.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPersona {
    Id(String),
    Object { id: String },
}

impl StoredPersona {
    fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

/// Owns the conversation. Share it behind an `Arc`; every operation takes
/// `&self`.
pub struct SessionManager {
    pub(super) state: Mutex<SessionState>,
    pub(super) pending: AtomicBool,
    pub(super) ids: MessageIdGen,
    pub(super) registry: PersonaRegistry,
    pub(super) store: Arc<dyn PersistentStore>,
    pub(super) gateway: Arc<dyn ModelGateway>,
    pub(super) options: SessionOptions,
}

impl SessionManager {
    /// Build a session from whatever the store holds.
    ///
    /// Reads the store exactly once. Missing or corrupt entries fall back to
    /// a seeded welcome message and the registry's default persona; the
    /// failure is logged and never returned.
    pub fn restore(
        registry: PersonaRegistry,
        store: Arc<dyn PersistentStore>,
        gateway: Arc<dyn ModelGateway>,
        options: SessionOptions,
    ) -> Self {
        let messages = load_history(store.as_ref())
            .unwrap_or_else(|| vec![Message::bot(WELCOME_ID, options.welcome_message.clone())]);
        let persona = load_persona(store.as_ref(), &registry)
            .unwrap_or_else(|| registry.default_persona().clone());

        let last_id = messages.iter().map(|m| m.id).max().unwrap_or(0);
        info!(
            messages = messages.len(),
            persona = %persona.id,
            "session restored"
        );

        Self {
            state: Mutex::new(SessionState {
                messages,
                persona,
                epoch: 0,
            }),
            pending: AtomicBool::new(false),
            ids: MessageIdGen::starting_after(last_id),
            registry,
            store,
            gateway,
            options,
        }
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select another persona and start an empty conversation under it.
    pub fn switch_persona(&self, persona_id: &str) -> Result<Persona, SessionError> {
        let persona = self
            .registry
            .get(persona_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownPersona(persona_id.to_string()))?;

        let mut state = self.lock_state();
        state.persona = persona.clone();
        state.messages.clear();
        state.epoch += 1;
        self.persist_persona(&state.persona);
        self.persist_messages(&state.messages);

        info!(persona = %persona.id, "persona switched, history cleared");
        Ok(persona)
    }

    /// Clear the conversation. The persona selection is kept.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        state.messages.clear();
        state.epoch += 1;
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!("failed to remove persisted history: {e}");
        }
        self.persist_messages(&state.messages);
        info!("conversation reset");
    }

    /// Snapshot of the message log, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock_state().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock_state().messages.len()
    }

    pub fn last_bot_message(&self) -> Option<Message> {
        self.lock_state()
            .messages
            .iter()
            .rev()
            .find(|m| m.is_bot())
            .cloned()
    }

    pub fn selected_persona(&self) -> Persona {
        self.lock_state().persona.clone()
    }

    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub(super) fn persist_messages(&self, messages: &[Message]) {
        match serde_json::to_string(messages) {
            Ok(json) => {
                if let Err(e) = self.store.save(HISTORY_KEY, &json) {
                    warn!("failed to persist history: {e}");
                }
            }
            Err(e) => warn!("failed to serialize history: {e}"),
        }
    }

    pub(super) fn persist_persona(&self, persona: &Persona) {
        match serde_json::to_string(&persona.id) {
            Ok(json) => {
                if let Err(e) = self.store.save(PERSONA_KEY, &json) {
                    warn!("failed to persist persona: {e}");
                }
            }
            Err(e) => warn!("failed to serialize persona: {e}"),
        }
    }
}

fn load_entry(store: &dyn PersistentStore, key: &str) -> Option<String> {
    match store.load(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("failed to read {key}, using default: {e}");
            None
        }
    }
}

fn load_history(store: &dyn PersistentStore) -> Option<Vec<Message>> {
    let raw = load_entry(store, HISTORY_KEY)?;
    match serde_json::from_str::<Vec<Message>>(&raw) {
        Ok(messages) => Some(messages),
        Err(e) => {
            warn!("stored history is unreadable, starting fresh: {e}");
            None
        }
    }
}

fn load_persona(store: &dyn PersistentStore, registry: &PersonaRegistry) -> Option<Persona> {
    let raw = load_entry(store, PERSONA_KEY)?;
    let id = match serde_json::from_str::<StoredPersona>(&raw) {
        Ok(stored) => stored.into_id(),
        Err(e) => {
            warn!("stored persona is unreadable, using default: {e}");
            return None;
        }
    };

    let persona = registry.get(&id).cloned();
    if persona.is_none() {
        debug!(persona = %id, "stored persona no longer exists, using default");
    }
    persona
}
