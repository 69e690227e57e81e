//! Server crate: configuration, the HTTP surface, Telegram intake
//! (webhook or long-polling), chain handlers, and the outbound Telegram
//! notifier. The binary in `main.rs` wires real clients into
//! [`state::build_state`]; tests inject mocks through the same seam.

pub mod config;
pub mod handlers;
pub mod http;
pub mod state;
pub mod telegram;

pub use config::{AppConfig, TelegramMode};
pub use http::build_router;
pub use state::{build_state, AppState};
