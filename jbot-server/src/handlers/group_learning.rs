//! Handler that records group-chat utterances as learned memory.

use async_trait::async_trait;
use jbot_core::{Handler, InboundMessage, Result};
use storage::{BrainRepository, MemoryEntryRecord};
use tracing::{error, info, instrument};

/// Topic label for passively learned group snippets.
const GROUP_TOPIC: &str = "Group Chat";

/// In multi-party rooms, saves "{speaker}: {text}" as a memory entry with
/// the group title as provenance. Private chats pass through untouched;
/// a failed save is logged and the chain continues.
#[derive(Clone)]
pub struct GroupLearningHandler {
    repo: BrainRepository,
}

impl GroupLearningHandler {
    pub fn new(repo: BrainRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Handler for GroupLearningHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        if !message.chat.kind.is_group() {
            return Ok(true);
        }

        let title = message.chat.title.as_deref().unwrap_or("Unknown Group");
        let entry = MemoryEntryRecord::new(
            GROUP_TOPIC,
            format!("{}: {}", message.speaker(), message.text),
            format!("Telegram - {}", title),
        );

        info!(
            chat_id = %message.chat.id,
            group = %title,
            "step: GroupLearningHandler learning group message"
        );

        if let Err(e) = self.repo.save(&entry).await {
            error!(error = %e, chat_id = %message.chat.id, "Failed to save group memory");
        }

        Ok(true)
    }
}
