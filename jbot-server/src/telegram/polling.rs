//! Long-polling intake: converts teloxide messages to core
//! [`InboundMessage`]s and passes them to the handler chain. Alternative
//! to the webhook route for deployments without a public URL.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use handler_chain::HandlerChain;
use jbot_core::{Chat, ChatKind, HandlerResponse, InboundMessage, Notifier, Sender};
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

/// Applies the same accept policy as the webhook route to a polled
/// teloxide message.
fn convert_polled_message(
    msg: &teloxide::types::Message,
    ignore_commands: bool,
) -> Option<InboundMessage> {
    let text = msg.text()?;
    if text.is_empty() {
        return None;
    }
    if ignore_commands && text.starts_with('/') {
        return None;
    }

    let kind = if msg.chat.is_group() || msg.chat.is_supergroup() {
        ChatKind::Group
    } else if msg.chat.is_channel() {
        ChatKind::Channel
    } else {
        ChatKind::Private
    };

    Some(InboundMessage {
        chat: Chat {
            id: msg.chat.id.0.to_string(),
            kind,
            title: msg.chat.title().map(str::to_string),
        },
        sender: msg.from.as_ref().map(|u| Sender {
            username: u.username.clone(),
            first_name: Some(u.first_name.clone()),
        }),
        text: text.to_string(),
        received_at: Utc::now(),
    })
}

/// Starts the polling repl. Clears any registered webhook first (polling
/// and webhooks are mutually exclusive on the Telegram side), then runs
/// each accepted message through the chain in a spawned task and sends
/// the reply through the notifier.
#[instrument(skip(bot, chain, notifier))]
pub async fn run_polling(
    bot: teloxide::Bot,
    chain: HandlerChain,
    notifier: Arc<dyn Notifier>,
    ignore_commands: bool,
) -> Result<()> {
    info!("Clearing webhook (if any) before polling");
    if let Err(e) = bot.delete_webhook().await {
        warn!(error = %e, "Failed to delete webhook, continuing anyway");
    }

    info!("Polling intake started");

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let notifier = notifier.clone();

        async move {
            let Some(inbound) = convert_polled_message(&msg, ignore_commands) else {
                return Ok(());
            };

            info!(
                chat_id = %inbound.chat.id,
                "Received polled message"
            );

            tokio::spawn(async move {
                match chain.handle(&inbound).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = notifier.send_text(&inbound.chat.id, &text).await {
                            error!(error = %e, chat_id = %inbound.chat.id, "Failed to send reply");
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, chat_id = %inbound.chat.id, "Handler chain failed");
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
