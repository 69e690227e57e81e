//! Admin training endpoints: correction authoring, manual memory
//! authoring, admin chat with audit trail, brain dump, and the static
//! admin page.

use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use storage::{CorrectionRecord, MemoryEntryRecord};
use tracing::{error, info, instrument};

use crate::state::AppState;

/// Source recorded for `/teach` writes with no explicit source.
const TEACH_DEFAULT_SOURCE: &str = "Manual";

/// How many entries `GET /brain` returns.
const BRAIN_DUMP_LIMIT: i64 = 50;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRequest {
    pub prompt: Option<String>,
    pub corrected_reply: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `POST /admin/train`: stores a prompt→reply correction.
#[instrument(skip(state, req))]
pub async fn train(
    State(state): State<AppState>,
    Json(req): Json<TrainRequest>,
) -> impl IntoResponse {
    let (Some(prompt), Some(corrected_reply)) =
        (non_empty(req.prompt), non_empty(req.corrected_reply))
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "prompt and correctedReply are required"})),
        );
    };

    let correction = CorrectionRecord::new(prompt, corrected_reply, req.tags);

    match state.corrections.save(&correction).await {
        Ok(()) => {
            info!(correction_id = %correction.id, "Correction trained");
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "Correction saved",
                    "data": correction,
                })),
            )
        }
        Err(e) => {
            error!(error = %e, "Failed to save correction");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": e.to_string()})),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TeachRequest {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
}

/// `POST /teach`: stores a free-form memory entry.
#[instrument(skip(state, req))]
pub async fn teach(
    State(state): State<AppState>,
    Json(req): Json<TeachRequest>,
) -> impl IntoResponse {
    let (Some(topic), Some(content)) = (non_empty(req.topic), non_empty(req.content)) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "topic and content are required"})),
        );
    };

    let source = non_empty(req.source).unwrap_or_else(|| TEACH_DEFAULT_SOURCE.to_string());
    let entry = MemoryEntryRecord::new(topic, content, source);

    match state.brain.save(&entry).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"success": true, "data": entry})),
        ),
        Err(e) => {
            error!(error = %e, "Failed to save memory entry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": e.to_string()})),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminChatRequest {
    pub prompt: Option<String>,
    pub feedback: Option<String>,
}

/// `POST /admin/chat`: resolves a reply for the admin and records the
/// turn (with optional feedback standing in for the reply) as an audit
/// memory entry. The audit write is best-effort: a storage failure is
/// logged and the reply still goes out.
#[instrument(skip(state, req))]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<AdminChatRequest>,
) -> impl IntoResponse {
    let Some(prompt) = non_empty(req.prompt) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "prompt is required"})),
        );
    };

    let reply = state.resolver.resolve(&prompt).await.into_text();

    let correction = non_empty(req.feedback).unwrap_or_else(|| reply.clone());
    let entry = MemoryEntryRecord::new(
        "Admin Correction",
        format!("Prompt: {}\nCorrection: {}", prompt, correction),
        "Admin Trainer",
    );
    if let Err(e) = state.brain.save(&entry).await {
        error!(error = %e, "Failed to save admin chat audit entry");
    }

    (StatusCode::OK, Json(json!({"reply": reply})))
}

/// `GET /brain`: most recent memory entries, newest first.
#[instrument(skip(state))]
pub async fn brain_dump(State(state): State<AppState>) -> impl IntoResponse {
    match state.brain.recent(BRAIN_DUMP_LIMIT).await {
        Ok(memories) => (StatusCode::OK, Json(json!({"memories": memories}))),
        Err(e) => {
            error!(error = %e, "Failed to read memory entries");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
        }
    }
}

/// `GET /admin`: the static training panel.
pub async fn admin_page() -> Html<&'static str> {
    Html(include_str!("../../static/admin.html"))
}
