//! Session types and the pending guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::context::DEFAULT_CONTEXT_WINDOW;
use crate::message::Message;

/// Prefix of every bot turn that reports a failed request.
pub const ERROR_TURN_PREFIX: &str = "❌ Error:";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown persona: {0}")]
    UnknownPersona(String),
    #[error("duplicate persona id: {0}")]
    DuplicatePersona(String),
}

/// Tunables that do not change during a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Prior turns replayed with each request.
    pub context_window: usize,
    /// Stamp the system instruction with the local time.
    pub include_timestamp: bool,
    /// Bot message seeded into a conversation with no stored history.
    pub welcome_message: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            include_timestamp: true,
            welcome_message: "Hi! How can I help you today?".into(),
        }
    }
}

/// Why a submission was dropped without touching the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank text and no image.
    EmptyInput,
    /// Another request is still outstanding.
    Busy,
}

/// How a `send_turn` call settled.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Nothing was appended.
    Rejected(RejectReason),
    /// User turn and the model's reply were appended.
    Replied(Message),
    /// User turn and an error turn were appended.
    Failed(Message),
    /// The log was reset or the persona switched while the request was in
    /// flight; the reply was dropped.
    Discarded,
}

impl TurnOutcome {
    /// The bot turn appended by this call, if any.
    pub fn bot_message(&self) -> Option<&Message> {
        match self {
            Self::Replied(msg) | Self::Failed(msg) => Some(msg),
            Self::Rejected(_) | Self::Discarded => None,
        }
    }
}

/// Holds the pending flag for the duration of one request.
///
/// The flag is cleared on drop, so success, failure, early return and a
/// dropped future all release it.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
