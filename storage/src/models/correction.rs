//! Prompt→reply correction model.
//!
//! Maps to the `corrections` table. Corrections are consulted on every
//! resolved prompt before any remote completion call; an incoming prompt
//! that contains `prompt` (case-insensitive) gets `corrected_reply`
//! verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author recorded when the admin endpoint does not identify one.
pub const DEFAULT_AUTHOR: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRecord {
    pub id: String,
    /// Pattern matched as a case-insensitive substring of incoming prompts.
    pub prompt: String,
    /// Text returned verbatim on match.
    pub corrected_reply: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl CorrectionRecord {
    /// Creates a new correction authored by [`DEFAULT_AUTHOR`].
    pub fn new(
        prompt: impl Into<String>,
        corrected_reply: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            corrected_reply: corrected_reply.into(),
            tags,
            author: DEFAULT_AUTHOR.to_string(),
            created_at: Utc::now(),
        }
    }
}
