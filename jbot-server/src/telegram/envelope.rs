//! Typed Telegram update envelope for the webhook route.
//!
//! The webhook deserializes into these structs and converts to a core
//! [`InboundMessage`] in one validation step; handlers never probe raw
//! JSON fields.

use chrono::Utc;
use jbot_core::{Chat, ChatKind, InboundMessage, Sender};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    pub from: Option<TelegramUser>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramUser {
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// Converts an update into an accepted [`InboundMessage`], or `None` when
/// the update carries no message, no text, empty text, or (policy
/// permitting) a `/`-prefixed command. Rejected updates are still
/// acknowledged at the transport level.
pub fn extract_inbound(update: TelegramUpdate, ignore_commands: bool) -> Option<InboundMessage> {
    let message = update.message?;
    let text = message.text?;
    if text.is_empty() {
        return None;
    }
    if ignore_commands && text.starts_with('/') {
        return None;
    }

    let kind = match message.chat.kind.as_str() {
        "group" | "supergroup" => ChatKind::Group,
        "channel" => ChatKind::Channel,
        _ => ChatKind::Private,
    };

    Some(InboundMessage {
        chat: Chat {
            id: message.chat.id.to_string(),
            kind,
            title: message.chat.title,
        },
        sender: message.from.map(|u| Sender {
            username: u.username,
            first_name: u.first_name,
        }),
        text,
        received_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(json: &str) -> TelegramUpdate {
        serde_json::from_str(json).expect("valid update json")
    }

    #[test]
    fn test_extract_private_message() {
        let update = update(
            r#"{"message": {"chat": {"id": 42, "type": "private"},
                "from": {"username": "alice", "first_name": "Alice"},
                "text": "hello"}}"#,
        );

        let inbound = extract_inbound(update, true).expect("accepted");
        assert_eq!(inbound.chat.id, "42");
        assert_eq!(inbound.chat.kind, ChatKind::Private);
        assert_eq!(inbound.text, "hello");
        assert_eq!(inbound.speaker(), "alice");
    }

    #[test]
    fn test_extract_group_message_keeps_title() {
        let update = update(
            r#"{"message": {"chat": {"id": -100, "type": "supergroup", "title": "Deals"},
                "from": {"first_name": "Bob"},
                "text": "refund?"}}"#,
        );

        let inbound = extract_inbound(update, true).expect("accepted");
        assert!(inbound.chat.kind.is_group());
        assert_eq!(inbound.chat.title.as_deref(), Some("Deals"));
        assert_eq!(inbound.speaker(), "Bob");
    }

    #[test]
    fn test_extract_rejects_missing_message_and_text() {
        assert!(extract_inbound(update(r#"{}"#), true).is_none());
        assert!(extract_inbound(
            update(r#"{"message": {"chat": {"id": 1, "type": "private"}}}"#),
            true
        )
        .is_none());
        assert!(extract_inbound(
            update(r#"{"message": {"chat": {"id": 1, "type": "private"}, "text": ""}}"#),
            true
        )
        .is_none());
    }

    #[test]
    fn test_extract_command_policy() {
        let command = r#"{"message": {"chat": {"id": 1, "type": "private"}, "text": "/start"}}"#;

        assert!(extract_inbound(update(command), true).is_none());

        let inbound = extract_inbound(update(command), false).expect("processed under policy");
        assert_eq!(inbound.text, "/start");
    }
}
