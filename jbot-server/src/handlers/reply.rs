//! Handler that resolves the reply and ends the chain.

use async_trait::async_trait;
use jbot_core::{Handler, HandlerResponse, InboundMessage, Result};
use resolver::ReplyResolver;
use tracing::instrument;

/// Terminal handler: asks the [`ReplyResolver`] and returns
/// `Reply(text)`. The resolver never errors, so every accepted message
/// ends with a reply.
#[derive(Clone)]
pub struct ReplyHandler {
    resolver: ReplyResolver,
}

impl ReplyHandler {
    pub fn new(resolver: ReplyResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Handler for ReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let resolution = self.resolver.resolve(&message.text).await;
        Ok(HandlerResponse::Reply(resolution.into_text()))
    }
}
