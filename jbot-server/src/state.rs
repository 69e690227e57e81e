//! Component wiring: builds repositories, the resolver, and the handler
//! chain from config plus injected LLM client and notifier. Tests pass
//! mocks through the same constructor the binary uses.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use jbot_core::Notifier;
use llm_client::LlmClient;
use resolver::ReplyResolver;
use storage::{BrainRepository, CorrectionRepository, MessageRepository, SqlitePoolManager};
use tracing::info;

use crate::config::AppConfig;
use crate::handlers::{GroupLearningHandler, PersistenceHandler, ReplyHandler};

/// Shared per-request state for the HTTP surface and Telegram intake.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub messages: MessageRepository,
    pub brain: BrainRepository,
    pub corrections: CorrectionRepository,
    pub resolver: ReplyResolver,
    pub chain: HandlerChain,
    pub notifier: Arc<dyn Notifier>,
}

/// Builds every component on top of one SQLite pool and composes the
/// message-processing chain: persist, learn from groups, resolve a reply.
pub async fn build_state(
    config: AppConfig,
    llm: Arc<dyn LlmClient>,
    notifier: Arc<dyn Notifier>,
) -> Result<AppState> {
    info!(database_path = %config.database_path, "Initializing components");

    let pool = SqlitePoolManager::new(&config.database_path).await?;
    let messages = MessageRepository::new(pool.clone()).await?;
    let brain = BrainRepository::new(pool.clone()).await?;
    let corrections = CorrectionRepository::new(pool).await?;

    let mut resolver = ReplyResolver::new(corrections.clone(), brain.clone(), llm);
    if let Some(persona) = &config.system_prompt {
        resolver = resolver.with_persona(persona.clone());
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(PersistenceHandler::new(messages.clone())))
        .add_handler(Arc::new(GroupLearningHandler::new(brain.clone())))
        .add_handler(Arc::new(ReplyHandler::new(resolver.clone())));

    Ok(AppState {
        config: Arc::new(config),
        messages,
        brain,
        corrections,
        resolver,
        chain,
        notifier,
    })
}
