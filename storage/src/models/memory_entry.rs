//! Learned memory entry model.
//!
//! Maps to the `memory_entries` table. Entries come from group-chat
//! observation, admin teach actions, or admin-chat audit records, and are
//! read back newest first as completion context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntryRecord {
    pub id: String,
    /// Category label, e.g. "Group Chat" or "Admin Correction".
    pub topic: String,
    pub content: String,
    /// Provenance label, e.g. "Admin Trainer" or "Telegram - <group title>".
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl MemoryEntryRecord {
    /// Creates a new entry with a generated UUID and current timestamp.
    pub fn new(
        topic: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: topic.into(),
            content: content.into(),
            source: source.into(),
            created_at: Utc::now(),
        }
    }
}
