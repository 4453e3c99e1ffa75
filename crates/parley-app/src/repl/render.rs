//! Text rendering for the REPL.

use parley_ai::{Message, Persona, PersonaRegistry, RejectReason, TurnOutcome};

pub fn format_message(message: &Message, persona: &Persona) -> String {
    if message.is_user() {
        let mut line = format!("you › {}", message.text);
        if let Some(image) = &message.attached_image {
            if !message.text.is_empty() {
                line.push(' ');
            }
            line.push_str(&format!("[image: {}]", image.attachment().name));
        }
        line
    } else {
        format!("{} {}", persona.emoji, message.text)
    }
}

/// The whole log, or the empty-state line when there is nothing to show.
pub fn format_history(messages: &[Message], persona: &Persona) -> String {
    if messages.is_empty() {
        return format!("{} {} is ready to assist you.", persona.emoji, persona.display_name);
    }
    messages
        .iter()
        .map(|m| format_message(m, persona))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_personas(registry: &PersonaRegistry, selected: &str) -> String {
    registry
        .iter()
        .map(|p| {
            let marker = if p.id == selected { "*" } else { " " };
            format!(
                "{marker} {} {:<14} {} - {}",
                p.emoji, p.id, p.display_name, p.short_description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// What to print when a turn finishes. `None` means nothing to show.
pub fn format_outcome(outcome: &TurnOutcome, persona: &Persona) -> Option<String> {
    match outcome {
        TurnOutcome::Replied(message) | TurnOutcome::Failed(message) => {
            Some(format_message(message, persona))
        }
        TurnOutcome::Rejected(RejectReason::Busy) => {
            Some("(still waiting for the previous reply)".into())
        }
        TurnOutcome::Rejected(RejectReason::EmptyInput) | TurnOutcome::Discarded => None,
    }
}
