//! Handler that persists incoming messages to storage in before().

use async_trait::async_trait;
use jbot_core::{Handler, InboundMessage, Result};
use storage::{ChatMessageRecord, MessageRepository};
use tracing::{error, info, instrument};

/// Saves each accepted message to the given [`MessageRepository`] in
/// before(); always continues. A failed save is logged and the message
/// still gets a reply.
#[derive(Clone)]
pub struct PersistenceHandler {
    repo: MessageRepository,
}

impl PersistenceHandler {
    pub fn new(repo: MessageRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Handler for PersistenceHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        info!(
            chat_id = %message.chat.id,
            "step: PersistenceHandler before, saving message"
        );

        let record = ChatMessageRecord::new(message.chat.id.as_str(), message.text.as_str());

        if let Err(e) = self.repo.save(&record).await {
            error!(error = %e, chat_id = %message.chat.id, "Failed to save chat message");
        }

        Ok(true)
    }
}
