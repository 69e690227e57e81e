//! Inbound chat message model.
//!
//! Maps to the `chat_messages` table; one row per accepted inbound
//! message, never mutated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRecord {
    pub id: String,
    /// Opaque conversation identifier (Telegram chat id or web client id).
    pub chat_id: String,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl ChatMessageRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            text: text.into(),
            received_at: Utc::now(),
        }
    }
}
