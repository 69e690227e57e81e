//! Binary entry point: load config, wire real clients, then serve the
//! HTTP surface and the chosen Telegram intake.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jbot_core::{init_tracing, Notifier};
use jbot_server::telegram::{register_webhook, run_polling, TelegramNotifier};
use jbot_server::{build_state, http, AppConfig, TelegramMode};
use llm_client::{LlmClient, OpenRouterClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "jbot-server", about = "Chatbot backend: Telegram and HTTP in, LLM out")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server
    Run {
        /// Telegram bot token; overrides BOT_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
    }
}

async fn run(token: Option<String>) -> Result<()> {
    let config = AppConfig::load(token)?;
    config.validate()?;

    if let Some(parent) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&config.log_file)?;

    info!(
        port = config.port,
        mode = ?config.telegram_mode,
        database_path = %config.database_path,
        "Starting jbot server"
    );

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let llm: Arc<dyn LlmClient> = Arc::new(
        OpenRouterClient::with_base_url(config.llm_api_key.clone(), config.llm_base_url.clone())
            .with_model(config.llm_model.clone()),
    );
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::from_bot(bot.clone()));

    let state = build_state(config, llm, notifier.clone()).await?;

    match state.config.telegram_mode {
        TelegramMode::Webhook => {
            register_webhook(&bot, &state.config.webhook_url()).await;
            http::serve_http(state).await
        }
        TelegramMode::Polling => {
            let ignore_commands = state.config.ignore_commands;
            let chain = state.chain.clone();
            tokio::select! {
                result = http::serve_http(state) => result,
                result = run_polling(bot, chain, notifier, ignore_commands) => result,
            }
        }
    }
}
