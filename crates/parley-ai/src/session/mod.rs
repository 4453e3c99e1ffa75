//! Conversation session management.
//!
//! A `SessionManager` owns the message log and the selected persona,
//! mirrors both to a `PersistentStore`, builds the context window for each
//! request and serializes requests with a single pending flag.

mod chat;
mod manager;
mod types;


pub use manager::SessionManager;
pub use types::{RejectReason, SessionError, SessionOptions, TurnOutcome};
