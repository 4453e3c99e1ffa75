//! The request lifecycle: `send_turn`.

use chrono::Local;
use parley_common::{new_correlation_id, sanitize_secrets};
use tracing::{debug, info, warn};

use crate::context::{build_context_block, system_instruction};
use crate::message::{ImageAttachment, ImageRef, Message};
use crate::{GenerateRequest, ProviderError};

use super::manager::SessionManager;
use super::types::{PendingGuard, RejectReason, TurnOutcome, ERROR_TURN_PREFIX};

/// Render a provider failure as the text of a bot turn.
pub(crate) fn error_turn_text(err: &ProviderError) -> String {
    format!("{ERROR_TURN_PREFIX} {}", sanitize_secrets(&err.to_string()))
}

impl SessionManager {
    /// Send one user turn and wait for the model's reply.
    ///
    /// Blank text without an image, or a call made while another request is
    /// outstanding, is rejected without touching the log. Otherwise the user
    /// turn is appended, exactly one gateway call is made, and its reply (or
    /// an error turn) is appended. Provider failures never escape as errors.
    pub async fn send_turn(
        &self,
        text: impl Into<String>,
        image: Option<ImageAttachment>,
    ) -> TurnOutcome {
        let text = text.into();
        if text.trim().is_empty() && image.is_none() {
            return TurnOutcome::Rejected(RejectReason::EmptyInput);
        }

        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            debug!("turn dropped, a request is already outstanding");
            return TurnOutcome::Rejected(RejectReason::Busy);
        };

        let request_id = new_correlation_id();
        let image = image.map(ImageRef::new);

        let (request, epoch) = {
            let mut state = self.lock_state();

            // The window is taken before the new turn is appended.
            let context = build_context_block(&state.messages, self.options.context_window);
            let now = self.options.include_timestamp.then(Local::now);
            let request = GenerateRequest {
                system_instruction: system_instruction(&state.persona, now),
                context,
                user_text: (!text.trim().is_empty()).then(|| text.clone()),
                image: image.clone(),
            };

            let user_message = Message::user(self.ids.next_id(), text, image);
            state.messages.push(user_message);
            self.persist_messages(&state.messages);

            info!(
                request = %request_id,
                persona = %state.persona.id,
                has_image = request.image.is_some(),
                "sending turn"
            );
            (request, state.epoch)
        };

        let result = self.gateway.generate(&request).await;

        let mut state = self.lock_state();
        if state.epoch != epoch {
            info!(request = %request_id, "conversation was cleared while waiting, reply dropped");
            return TurnOutcome::Discarded;
        }

        let outcome = match result {
            Ok(reply) => {
                debug!(request = %request_id, chars = reply.len(), "reply received");
                let bot = Message::bot(self.ids.next_id(), reply);
                state.messages.push(bot.clone());
                TurnOutcome::Replied(bot)
            }
            Err(e) => {
                warn!(request = %request_id, "request failed: {e}");
                let bot = Message::bot(self.ids.next_id(), error_turn_text(&e));
                state.messages.push(bot.clone());
                TurnOutcome::Failed(bot)
            }
        };
        self.persist_messages(&state.messages);
        outcome
    }
}
