//! Shared fixtures for server integration tests: a mock LLM client, a
//! recording notifier, and request helpers driving the router with
//! `tower::ServiceExt::oneshot`. No Telegram or LLM network traffic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use jbot_core::Notifier;
use jbot_server::{build_router, build_state, AppConfig, AppState, TelegramMode};
use llm_client::LlmClient;
use prompt::ChatMessage;
use tempfile::TempDir;
use tower::ServiceExt;

/// Mock LLM: canned reply or simulated failure, plus a call counter.
pub struct MockLlm {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockLlm {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, _messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => anyhow::bail!("simulated network error"),
        }
    }
}

/// Notifier that records (chat_id, text) pairs instead of calling Telegram.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, chat_id: &str, text: &str) -> jbot_core::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        Ok(())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub llm: Arc<MockLlm>,
    pub notifier: Arc<RecordingNotifier>,
    _temp_dir: TempDir,
}

fn test_config(temp_dir: &TempDir) -> AppConfig {
    AppConfig {
        bot_token: "test_bot_token".to_string(),
        llm_api_key: "test_llm_key".to_string(),
        server_url: "https://bot.example.com".to_string(),
        port: 0,
        database_path: temp_dir
            .path()
            .join("test.db")
            .to_str()
            .expect("utf-8 temp path")
            .to_string(),
        log_file: temp_dir
            .path()
            .join("test.log")
            .to_str()
            .expect("utf-8 temp path")
            .to_string(),
        llm_base_url: llm_client::DEFAULT_BASE_URL.to_string(),
        llm_model: llm_client::DEFAULT_MODEL.to_string(),
        system_prompt: None,
        telegram_mode: TelegramMode::Webhook,
        ignore_commands: true,
    }
}

async fn build_test_app(reply: Option<&str>) -> TestApp {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = test_config(&temp_dir);

    let llm = Arc::new(MockLlm {
        reply: reply.map(String::from),
        calls: AtomicUsize::new(0),
    });
    let notifier = Arc::new(RecordingNotifier::default());

    let state = build_state(config, llm.clone(), notifier.clone())
        .await
        .expect("build_state must succeed in tests");

    TestApp {
        state,
        llm,
        notifier,
        _temp_dir: temp_dir,
    }
}

/// App whose LLM answers with `reply`.
pub async fn test_app_with_reply(reply: &str) -> TestApp {
    build_test_app(Some(reply)).await
}

/// App whose LLM always fails.
pub async fn test_app_failing() -> TestApp {
    build_test_app(None).await
}

/// POSTs a JSON value and returns (status, parsed JSON body).
pub async fn post_json(
    state: &AppState,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// POSTs a raw body (for malformed-payload cases) and returns the status.
pub async fn post_raw(state: &AppState, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router response")
        .status()
}

/// GETs a path and returns (status, raw body string).
pub async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");

    let response = build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).to_string())
}
