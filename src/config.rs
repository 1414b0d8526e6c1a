//! Layered configuration for the reply endpoint.
//!
//! Priority (highest first): CLI flag, CLI env var (`PORT`, `HOST`),
//! `CHAT_`-prefixed env vars, config file, defaults.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::reply::Provider;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reply: ReplyConfig,
    /// Chat completions backend. Without it the endpoint answers with
    /// [`ReplyConfig::canned`].
    #[serde(default)]
    pub llm: Option<LlmConfig>,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplyConfig {
    /// Reply used when no LLM is configured.
    pub canned: String,
    /// Reply sent when the LLM call fails.
    pub fallback: String,
}

/// Groq, the provider used when only an API key is given.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

fn default_llm_base_url() -> String {
    DEFAULT_LLM_BASE_URL.to_string()
}

fn default_llm_model() -> String {
    DEFAULT_LLM_MODEL.to_string()
}

/// Present as soon as any `llm.*` key is set; missing keys fall back to Groq.
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Azure deployment name (required for Azure `OpenAI`).
    #[serde(default)]
    pub deployment_name: Option<String>,
    /// Azure API version.
    #[serde(default)]
    pub api_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct KnowledgeConfig {
    /// Local file whose text is given to the model.
    #[serde(default)]
    pub document_path: Option<String>,
    /// Page fetched once at startup and given to the model.
    #[serde(default)]
    pub document_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("reply.canned", "Resposta do bot")?
            .set_default(
                "reply.fallback",
                "Desculpe, houve um erro ao processar sua mensagem.",
            )?;

        // Explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // CHAT_SERVER__PORT=8000, CHAT_LLM__MODEL=..., etc.
        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Unprefixed LLM variables, as most provider docs name them.
        // LLM_API_KEY comes after GROQ_API_KEY so it wins when both are set.
        for (var, key) in [
            ("GROQ_API_KEY", "llm.api_key"),
            ("LLM_BASE_URL", "llm.base_url"),
            ("LLM_MODEL", "llm.model"),
            ("LLM_API_KEY", "llm.api_key"),
        ] {
            if let Ok(val) = env::var(var) {
                if !val.trim().is_empty() {
                    builder = builder.set_override(key, val)?;
                }
            }
        }

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if let Some(llm) = &self.llm {
            if llm.base_url.trim().is_empty() {
                return Err(config::ConfigError::Message(
                    "llm.base_url cannot be empty".to_string(),
                ));
            }
            if llm.model.trim().is_empty() {
                return Err(config::ConfigError::Message(
                    "llm.model cannot be empty".to_string(),
                ));
            }
            if matches!(
                Provider::detect_from_url(&llm.base_url),
                Provider::AzureOpenAI { .. }
            ) && llm.deployment_name.is_none()
            {
                return Err(config::ConfigError::Message(
                    "llm.deployment_name is required for Azure OpenAI".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Socket address string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
