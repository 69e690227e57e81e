//! App config: Telegram, LLM, HTTP, logging, database. Loaded from env.
//!
//! Constructed once in `main` and passed into components; business logic
//! never reads the environment directly.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// How Telegram updates reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramMode {
    /// Register `{SERVER_URL}/webhook` with setWebhook and receive updates
    /// over HTTP (default).
    Webhook,
    /// Long-poll getUpdates via teloxide; no public URL needed.
    Polling,
}

impl FromStr for TelegramMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "webhook" => Ok(TelegramMode::Webhook),
            "polling" => Ok(TelegramMode::Polling),
            other => anyhow::bail!("TELEGRAM_MODE must be 'webhook' or 'polling', got '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// OPENROUTER_API_KEY
    pub llm_api_key: String,
    /// SERVER_URL: public base URL used to register the webhook
    pub server_url: String,
    /// PORT
    pub port: u16,
    /// DATABASE_PATH: SQLite file
    pub database_path: String,
    /// LOG_FILE
    pub log_file: String,
    /// LLM_BASE_URL
    pub llm_base_url: String,
    /// LLM_MODEL
    pub llm_model: String,
    /// SYSTEM_PROMPT: persona override for the resolver
    pub system_prompt: Option<String>,
    /// TELEGRAM_MODE
    pub telegram_mode: TelegramMode,
    /// IGNORE_COMMANDS: skip `/`-prefixed texts on Telegram intake
    pub ignore_commands: bool,
}

impl AppConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if
    /// provided. Missing required values fail here, before anything serves.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let llm_api_key = env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY not set")?;
        let server_url = env::var("SERVER_URL").context("SERVER_URL not set")?;
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10000);
        let database_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "jbot.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/jbot-server.log".to_string());
        let llm_base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| llm_client::DEFAULT_BASE_URL.to_string());
        let llm_model =
            env::var("LLM_MODEL").unwrap_or_else(|_| llm_client::DEFAULT_MODEL.to_string());
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let telegram_mode = match env::var("TELEGRAM_MODE") {
            Ok(s) => s.parse()?,
            Err(_) => TelegramMode::Webhook,
        };
        let ignore_commands = env::var("IGNORE_COMMANDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Ok(Self {
            bot_token,
            llm_api_key,
            server_url,
            port,
            database_path,
            log_file,
            llm_base_url,
            llm_model,
            system_prompt,
            telegram_mode,
            ignore_commands,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.server_url).is_err() {
            anyhow::bail!("SERVER_URL is set but not a valid URL: {}", self.server_url);
        }
        Ok(())
    }

    /// Public webhook endpoint registered with Telegram.
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.server_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_mode_from_str() {
        assert_eq!(
            "webhook".parse::<TelegramMode>().unwrap(),
            TelegramMode::Webhook
        );
        assert_eq!(
            "Polling".parse::<TelegramMode>().unwrap(),
            TelegramMode::Polling
        );
        assert!("push".parse::<TelegramMode>().is_err());
    }

    #[test]
    fn test_webhook_url_joins_without_double_slash() {
        let config = AppConfig {
            bot_token: "t".to_string(),
            llm_api_key: "k".to_string(),
            server_url: "https://bot.example.com/".to_string(),
            port: 10000,
            database_path: "jbot.db".to_string(),
            log_file: "logs/jbot-server.log".to_string(),
            llm_base_url: llm_client::DEFAULT_BASE_URL.to_string(),
            llm_model: llm_client::DEFAULT_MODEL.to_string(),
            system_prompt: None,
            telegram_mode: TelegramMode::Webhook,
            ignore_commands: true,
        };
        assert_eq!(config.webhook_url(), "https://bot.example.com/webhook");
    }
}
