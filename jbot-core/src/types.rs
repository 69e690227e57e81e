//! Core types: chat, sender, inbound message, handler response, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of chat a message arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Channel,
}

impl ChatKind {
    /// True for multi-party rooms (group chats observed for passive learning).
    pub fn is_group(&self) -> bool {
        matches!(self, ChatKind::Group)
    }
}

/// Conversation identity. Ids are opaque strings so that Telegram numeric
/// ids and free-form web client ids share one type; transports that need a
/// numeric id parse it back at the send boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub kind: ChatKind,
    /// Group title, when the transport provides one.
    pub title: Option<String>,
}

/// Who wrote the message, as far as the transport tells us.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl Sender {
    /// Best available display label: username, then first name.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.first_name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A single accepted inbound message. Adapters guarantee `text` is
/// non-empty before a message enters the handler chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub chat: Chat,
    pub sender: Option<Sender>,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Speaker label for learned group snippets.
    pub fn speaker(&self) -> &str {
        self.sender
            .as_ref()
            .map(|s| s.display_name())
            .unwrap_or("Unknown")
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body
/// back to the adapter that drove the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to the next handler.
    Continue,
    /// Stop the chain without a reply.
    Stop,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Single handler concept: optional before / handle / after. The chain runs
/// all before hooks, then handle until Stop/Reply, then all after hooks in
/// reverse order.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &InboundMessage) -> crate::error::Result<bool> {
        Ok(true)
    }

    /// Processes the message. Return Stop or Reply to end the handle phase.
    async fn handle(&self, _message: &InboundMessage) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &InboundMessage,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_kind_is_group() {
        assert!(ChatKind::Group.is_group());
        assert!(!ChatKind::Private.is_group());
        assert!(!ChatKind::Channel.is_group());
    }

    #[test]
    fn test_sender_display_name_prefers_username() {
        let sender = Sender {
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
        };
        assert_eq!(sender.display_name(), "alice");
    }

    #[test]
    fn test_sender_display_name_falls_back() {
        let sender = Sender {
            username: None,
            first_name: Some("Alice".to_string()),
        };
        assert_eq!(sender.display_name(), "Alice");

        let anonymous = Sender {
            username: None,
            first_name: None,
        };
        assert_eq!(anonymous.display_name(), "Unknown");
    }

    #[test]
    fn test_message_speaker_without_sender() {
        let message = InboundMessage {
            chat: Chat {
                id: "1".to_string(),
                kind: ChatKind::Group,
                title: Some("Deals".to_string()),
            },
            sender: None,
            text: "hello".to_string(),
            received_at: Utc::now(),
        };
        assert_eq!(message.speaker(), "Unknown");
    }
}
