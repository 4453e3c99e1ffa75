//! Request context: the recency window and the system instruction.
//!
//! The model call is stateless, so each request replays the last few turns
//! as plain text ahead of the new user input.

use chrono::{DateTime, Local};

use crate::message::Message;
use crate::persona::Persona;

pub const DEFAULT_CONTEXT_WINDOW: usize = 5;

/// Render one turn as `"<Role>: <text>"`.
pub fn render_turn(message: &Message) -> String {
    format!("{}: {}", message.sender.role_label(), message.text)
}

/// Build the labeled context block from the trailing `window` turns of
/// `history`.
///
/// `history` must be the log as it stood before the new user turn was
/// appended. Returns `None` when there is nothing to replay. Attachments are
/// never replayed, only text.
pub fn build_context_block(history: &[Message], window: usize) -> Option<String> {
    let start = history.len().saturating_sub(window);
    let recent = &history[start..];
    if recent.is_empty() {
        return None;
    }

    let lines = recent
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("Context:\n{lines}\n---"))
}

/// The persona's instruction, optionally stamped with the local time.
pub fn system_instruction(persona: &Persona, now: Option<DateTime<Local>>) -> String {
    match now {
        Some(now) => format!(
            "{}\n[SYSTEM DATA: Current Time {}]",
            persona.system_instruction,
            now.format("%A, %d %B %Y %H:%M %:z")
        ),
        None => persona.system_instruction.clone(),
    }
}
