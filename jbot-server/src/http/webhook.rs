//! Telegram webhook route.
//!
//! Always acknowledges with an empty 200 (malformed payloads, rejected
//! updates, and internal failures alike) so Telegram never retry-storms
//! the endpoint. Only the acknowledgment is transport-visible; replies go
//! out through the notifier.

use axum::{body::Bytes, extract::State, http::StatusCode};
use jbot_core::HandlerResponse;
use tracing::{error, info, instrument, warn};

use crate::state::AppState;
use crate::telegram::{extract_inbound, TelegramUpdate};

#[instrument(skip(state, body))]
pub async fn telegram_webhook(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed webhook payload");
            return StatusCode::OK;
        }
    };

    let Some(inbound) = extract_inbound(update, state.config.ignore_commands) else {
        return StatusCode::OK;
    };

    info!(
        chat_id = %inbound.chat.id,
        "Received webhook message"
    );

    match state.chain.handle(&inbound).await {
        Ok(HandlerResponse::Reply(text)) => {
            if let Err(e) = state.notifier.send_text(&inbound.chat.id, &text).await {
                error!(error = %e, chat_id = %inbound.chat.id, "Failed to send reply");
            }
        }
        Ok(_) => {}
        Err(e) => {
            error!(error = %e, chat_id = %inbound.chat.id, "Handler chain failed");
        }
    }

    StatusCode::OK
}
