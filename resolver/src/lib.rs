//! # Reply resolver
//!
//! Decides how to answer a prompt: an admin-authored correction wins
//! outright, otherwise the remote completion API is asked once with
//! recent learned memory as context, and any remote failure degrades to a
//! fixed apology. [`ReplyResolver::resolve`] never returns an error, so
//! adapters always get something to send.
//!
//! Store reads degrade too: a failed correction or memory lookup is
//! logged and treated as empty, so persistence trouble never silences the
//! chat channel.

use std::sync::Arc;

use llm_client::LlmClient;
use prompt::ChatMessage;
use storage::{BrainRepository, CorrectionRecord, CorrectionRepository, MemoryEntryRecord};
use tracing::{error, info, instrument, warn};

/// Returned when the remote completion call fails in any way.
pub const FALLBACK_REPLY: &str = "I couldn't think of a response.";

/// Default persona system instruction when none is configured.
pub const DEFAULT_PERSONA: &str =
    "You are a deal-desk assistant. Answer in the operator's tone and keep replies short and concrete.";

/// How many recent memory entries accompany a completion request.
pub const MEMORY_CONTEXT_LIMIT: i64 = 15;

/// How a prompt was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An admin correction matched; `reply` is its text verbatim.
    Correction { reply: String },
    /// The remote completion API answered; `reply` is trimmed.
    Completion { reply: String },
    /// The remote call failed; callers send [`FALLBACK_REPLY`].
    Fallback,
}

impl Resolution {
    /// The user-visible reply text.
    pub fn into_text(self) -> String {
        match self {
            Resolution::Correction { reply } | Resolution::Completion { reply } => reply,
            Resolution::Fallback => FALLBACK_REPLY.to_string(),
        }
    }

    pub fn is_correction(&self) -> bool {
        matches!(self, Resolution::Correction { .. })
    }
}

/// Resolves prompts against corrections, then the remote model. Holds only
/// shared handles; safe to call concurrently.
#[derive(Clone)]
pub struct ReplyResolver {
    corrections: CorrectionRepository,
    brain: BrainRepository,
    llm: Arc<dyn LlmClient>,
    persona: String,
}

impl ReplyResolver {
    pub fn new(
        corrections: CorrectionRepository,
        brain: BrainRepository,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            corrections,
            brain,
            llm,
            persona: DEFAULT_PERSONA.to_string(),
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Resolves a reply for `prompt`. Callers filter empty prompts upstream.
    #[instrument(skip(self, prompt))]
    pub async fn resolve(&self, prompt: &str) -> Resolution {
        match self.corrections.all_newest_first().await {
            Ok(corrections) => {
                if let Some(correction) = find_match(&corrections, prompt) {
                    info!(
                        correction_id = %correction.id,
                        correction_prompt = %correction.prompt,
                        "Correction matched, skipping remote call"
                    );
                    return Resolution::Correction {
                        reply: correction.corrected_reply.clone(),
                    };
                }
            }
            Err(e) => {
                warn!(error = %e, "Correction lookup failed, continuing without overrides");
            }
        }

        let memories = match self.brain.recent(MEMORY_CONTEXT_LIMIT).await {
            Ok(memories) => memories,
            Err(e) => {
                warn!(error = %e, "Memory lookup failed, continuing without context");
                Vec::new()
            }
        };

        let messages = build_messages(&self.persona, &memories, prompt);

        match self.llm.complete(messages).await {
            Ok(reply) => Resolution::Completion {
                reply: reply.trim().to_string(),
            },
            Err(e) => {
                error!(error = %e, "Completion call failed, using fallback reply");
                Resolution::Fallback
            }
        }
    }
}

/// First correction whose prompt is a case-insensitive substring of the
/// input. The slice arrives newest first, so the newest match wins. An
/// empty stored prompt matches every input.
fn find_match<'a>(corrections: &'a [CorrectionRecord], prompt: &str) -> Option<&'a CorrectionRecord> {
    let lowered = prompt.to_lowercase();
    corrections
        .iter()
        .find(|c| lowered.contains(&c.prompt.to_lowercase()))
}

/// Persona system message, one system message per memory entry (newest
/// first), then the user prompt.
fn build_messages(
    persona: &str,
    memories: &[MemoryEntryRecord],
    prompt: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(memories.len() + 2);
    messages.push(ChatMessage::system(persona));
    for memory in memories {
        messages.push(ChatMessage::system(memory.content.clone()));
    }
    messages.push(ChatMessage::user(prompt));
    messages
}
