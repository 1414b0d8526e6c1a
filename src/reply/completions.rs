//! Chat completions reply engine.
//!
//! Sends the conversation to `/v1/chat/completions` (non-streaming) with a
//! system prompt that carries the knowledge document.

use anyhow::Context;
use serde_json::{Value, json};

use super::{Provider, ReplyEngine};
use crate::config::LlmConfig;
use crate::protocol::{Message, Sender};

/// Assistant persona. `{informacoes}` is replaced by the knowledge document.
pub const SYSTEM_PROMPT: &str = "Você é um assistente amigável chamado OlimpIA que utiliza as \
                                 seguintes informações para formular as suas respostas: {informacoes}.";

/// LLM connection and model settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Base URL for the LLM API (e.g., `https://api.groq.com/openai`).
    pub base_url: String,
    /// Optional API key for authentication.
    pub api_key: Option<String>,
    /// Model identifier (e.g., `llama-3.3-70b-versatile`).
    pub model: String,
    /// Provider, detected from `base_url`.
    pub provider: Provider,
}

impl LlmSettings {
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        let provider = Provider::detect_from_url(&config.base_url).with_azure_deployment(
            config.deployment_name.as_deref(),
            config.api_version.as_deref(),
        );

        Self {
            base_url: config.base_url.clone(),
            api_key: config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
            model: config.model.clone(),
            provider,
        }
    }
}

/// Engine backed by an `OpenAI`-compatible chat completions API.
#[derive(Clone)]
pub struct CompletionsReply {
    http: reqwest::Client,
    settings: LlmSettings,
}

impl std::fmt::Debug for CompletionsReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionsReply")
            .field("base_url", &self.settings.base_url)
            .field("model", &self.settings.model)
            .field("provider", &self.settings.provider)
            .finish_non_exhaustive()
    }
}

impl CompletionsReply {
    #[must_use]
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }
}

/// Build the chat messages: system prompt first, then the history with `bot`
/// mapped to the `assistant` role.
#[must_use]
pub fn build_messages(messages: &[Message], document: &str) -> Vec<Value> {
    let system = SYSTEM_PROMPT.replace("{informacoes}", document);

    std::iter::once(json!({ "role": "system", "content": system }))
        .chain(messages.iter().map(|m| {
            let role = match m.sender {
                Sender::User => "user",
                Sender::Bot => "assistant",
            };
            json!({ "role": role, "content": m.content })
        }))
        .collect()
}

/// Pull `choices[0].message.content` out of a completion response.
pub fn extract_content(body: &Value) -> anyhow::Result<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(ToString::to_string)
        .context("completion response has no message content")
}

#[async_trait::async_trait]
impl ReplyEngine for CompletionsReply {
    async fn reply(&self, messages: &[Message], document: &str) -> anyhow::Result<String> {
        let url = self.settings.provider.build_chat_url(&self.settings.base_url);

        let body = json!({
            "model": self.settings.model,
            "stream": false,
            "messages": build_messages(messages, document),
        });

        let mut rb = self.http.post(&url).json(&body);
        if let Some(key) = &self.settings.api_key {
            rb = self.settings.provider.authorize(rb, key);
        }

        tracing::debug!(
            name: "llm.request",
            model = %self.settings.model,
            messages = messages.len(),
            "Requesting completion"
        );

        let resp = rb.send().await?.error_for_status()?;
        let value: Value = resp.json().await?;
        extract_content(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages_maps_roles() {
        let history = [Message::user("oi"), Message::bot("olá!"), Message::user("preço?")];
        let out = build_messages(&history, "Peças automotivas");

        assert_eq!(out.len(), 4);
        assert_eq!(out[0]["role"], "system");
        assert!(
            out[0]["content"]
                .as_str()
                .unwrap()
                .ends_with("suas respostas: Peças automotivas.")
        );
        assert_eq!(out[1]["role"], "user");
        assert_eq!(out[2]["role"], "assistant");
        assert_eq!(out[2]["content"], "olá!");
        assert_eq!(out[3]["role"], "user");
    }

    #[test]
    fn test_extract_content() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "Olá!" } }]
        });
        assert_eq!(extract_content(&body).unwrap(), "Olá!");

        assert!(extract_content(&json!({ "choices": [] })).is_err());
    }

    #[test]
    fn test_settings_drop_blank_key() {
        let settings = LlmSettings::from_config(&LlmConfig {
            base_url: "https://api.groq.com/openai".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: Some("  ".to_string()),
            deployment_name: None,
            api_version: None,
        });

        assert!(settings.api_key.is_none());
        assert_eq!(settings.provider, Provider::Groq);
    }

    #[test]
    fn test_engine_keeps_azure_deployment() {
        let engine = CompletionsReply::new(LlmSettings::from_config(&LlmConfig {
            base_url: "https://res.openai.azure.com".to_string(),
            model: "gpt-4o".to_string(),
            api_key: Some("key".to_string()),
            deployment_name: Some("prod-gpt4o".to_string()),
            api_version: None,
        }));

        let settings = engine.settings();
        assert_eq!(settings.api_key.as_deref(), Some("key"));
        assert_eq!(
            settings.provider.build_chat_url(&settings.base_url),
            "https://res.openai.azure.com/openai/deployments/prod-gpt4o/chat/completions?api-version=2024-08-01-preview"
        );
    }
}
