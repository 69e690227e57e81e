//! Teloxide-based implementation of the outbound [`Notifier`].

use async_trait::async_trait;
use jbot_core::{JbotError, Notifier, Result};
use teloxide::{prelude::*, types::ChatId};

/// Sends replies through the Telegram sendMessage API. Chat ids arrive as
/// opaque strings and are parsed back to Telegram numeric ids here.
pub struct TelegramNotifier {
    bot: teloxide::Bot,
}

/// Parses an opaque chat id string into a Telegram numeric id.
pub fn parse_chat_id(s: &str) -> Result<i64> {
    s.parse().map_err(|_| JbotError::InvalidChatId(s.to_string()))
}

impl TelegramNotifier {
    /// Creates a notifier using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Wraps an existing bot handle (shared with webhook registration or
    /// the polling intake).
    pub fn from_bot(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()> {
        let id = parse_chat_id(chat_id)?;
        self.bot
            .send_message(ChatId(id), text)
            .await
            .map_err(|e| JbotError::Notify(e.to_string()))?;
        Ok(())
    }
}
