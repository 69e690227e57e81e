//! Telegram plumbing: update envelope, outbound notifier, webhook
//! registration, and the long-polling intake.

mod envelope;
mod notifier;
mod polling;

pub use envelope::{extract_inbound, TelegramChat, TelegramMessage, TelegramUpdate, TelegramUser};
pub use notifier::TelegramNotifier;
pub use polling::run_polling;

use tracing::{info, warn};

/// Registers `webhook_url` with the Telegram setWebhook API. Failure is
/// logged and the server keeps serving; updates just won't arrive until
/// registration succeeds on a later start.
pub async fn register_webhook(bot: &teloxide::Bot, webhook_url: &str) {
    use teloxide::prelude::*;

    let url = match reqwest::Url::parse(webhook_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, webhook_url = %webhook_url, "Webhook URL does not parse, skipping registration");
            return;
        }
    };

    match bot.set_webhook(url).await {
        Ok(_) => info!(webhook_url = %webhook_url, "Webhook registered"),
        Err(e) => warn!(error = %e, webhook_url = %webhook_url, "Webhook registration failed"),
    }
}
