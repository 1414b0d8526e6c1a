//! Reply engines used by the endpoint.
//!
//! The [`ReplyEngine`] trait turns a conversation plus a knowledge document
//! into the bot's next message. The endpoint picks an engine at startup:
//!
//! - [`CompletionsReply`]: `OpenAI`-compatible chat completions (Groq, `OpenAI`,
//!   Azure, `OpenRouter`, ...)
//! - [`CannedReply`]: a fixed answer, used when no LLM is configured

pub mod completions;
pub mod document;
pub mod provider;

pub use completions::{CompletionsReply, LlmSettings};
pub use document::load_document;
pub use provider::Provider;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::protocol::Message;

/// Produces the bot's reply to a conversation.
#[async_trait::async_trait]
pub trait ReplyEngine: Send + Sync + std::fmt::Debug {
    /// Reply to `messages` (oldest first) using `document` as background
    /// knowledge.
    async fn reply(&self, messages: &[Message], document: &str) -> anyhow::Result<String>;
}

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct CannedReply {
    text: String,
}

impl CannedReply {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait::async_trait]
impl ReplyEngine for CannedReply {
    async fn reply(&self, _messages: &[Message], _document: &str) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }
}

/// Engine selected by `config`: chat completions when `llm` is set, canned
/// reply otherwise.
#[must_use]
pub fn engine_from_config(config: &AppConfig) -> Arc<dyn ReplyEngine> {
    match &config.llm {
        Some(llm) => Arc::new(CompletionsReply::new(LlmSettings::from_config(llm))),
        None => Arc::new(CannedReply::new(config.reply.canned.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_reply_ignores_input() {
        let engine = CannedReply::new("Resposta do bot");
        let reply = engine
            .reply(&[Message::user("qualquer coisa")], "doc")
            .await
            .unwrap();
        assert_eq!(reply, "Resposta do bot");
    }
}
