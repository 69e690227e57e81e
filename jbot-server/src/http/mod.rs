//! HTTP surface: route table and server loop.

mod admin;
mod api;
mod webhook;

use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::state::AppState;

/// Builds the full route table over shared [`AppState`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::liveness))
        .route("/message", post(api::post_message))
        .route("/webhook", post(webhook::telegram_webhook))
        .route("/teach", post(admin::teach))
        .route("/admin/train", post(admin::train))
        .route("/admin/chat", post(admin::chat))
        .route("/brain", get(admin::brain_dump))
        .route("/admin", get(admin::admin_page))
        .with_state(state)
}

/// Binds the listen port and serves until shutdown.
pub async fn serve_http(state: AppState) -> anyhow::Result<()> {
    let port = state.config.port;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "HTTP surface listening");

    axum::serve(listener, app).await?;
    Ok(())
}
