//! Outbound notifier abstraction.
//!
//! The [`Notifier`] trait is transport-agnostic; the Telegram
//! implementation lives in the server crate next to the rest of the
//! Telegram plumbing.

use crate::error::Result;
use async_trait::async_trait;

/// Sends a text reply back to a chat over the transport's send API.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the chat identified by `chat_id`.
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()>;
}
