//! Public endpoints: liveness and the generic HTTP message adapter.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use jbot_core::{Chat, ChatKind, HandlerResponse, InboundMessage};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, instrument};

use crate::state::AppState;

/// Conversation id recorded when a web client doesn't identify itself.
pub const WEB_CLIENT_ID: &str = "web-client";

pub async fn liveness() -> &'static str {
    "jbot server is live"
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
}

/// `POST /message`: runs the same chain as the Telegram intake, but the
/// reply travels back in the response body instead of a notifier.
#[instrument(skip(state, req))]
pub async fn post_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> impl IntoResponse {
    let Some(text) = req.message.filter(|m| !m.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "message is required"})),
        );
    };

    let chat_id = req.user_id.unwrap_or_else(|| WEB_CLIENT_ID.to_string());
    let inbound = InboundMessage {
        chat: Chat {
            id: chat_id,
            kind: ChatKind::Private,
            title: None,
        },
        sender: None,
        text,
        received_at: Utc::now(),
    };

    match state.chain.handle(&inbound).await {
        Ok(HandlerResponse::Reply(reply)) => (
            StatusCode::OK,
            Json(json!({"success": true, "reply": reply})),
        ),
        Ok(other) => {
            error!(response = ?other, chat_id = %inbound.chat.id, "Chain ended without a reply");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "no reply produced"})),
            )
        }
        Err(e) => {
            error!(error = %e, chat_id = %inbound.chat.id, "Handler chain failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": e.to_string()})),
            )
        }
    }
}
