//! Provider detection for `OpenAI`-compatible chat completions.
//!
//! Providers differ in URL layout and in how the API key is sent.

/// Supported LLM providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// `OpenAI` (api.openai.com)
    OpenAI,
    /// Azure `OpenAI` Service
    AzureOpenAI {
        /// Deployment name (required for Azure)
        deployment_name: String,
        /// API version (e.g., "2024-08-01-preview")
        api_version: String,
    },
    /// `OpenRouter` (openrouter.ai)
    OpenRouter,
    /// Together AI (together.ai, together.xyz)
    TogetherAI,
    /// Groq (groq.com)
    Groq,
    /// Generic OpenAI-compatible provider
    Generic,
}

/// Azure API version used when none is configured.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-08-01-preview";

impl Provider {
    /// Detect provider from base URL.
    ///
    /// Azure is returned with an empty deployment name; callers fill it in
    /// with [`Provider::with_azure_deployment`].
    #[must_use]
    pub fn detect_from_url(base_url: &str) -> Self {
        let lower = base_url.to_lowercase();

        if lower.contains("azure.com") {
            Self::AzureOpenAI {
                deployment_name: String::new(),
                api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            }
        } else if lower.contains("openrouter.ai") {
            Self::OpenRouter
        } else if lower.contains("together.ai") || lower.contains("together.xyz") {
            Self::TogetherAI
        } else if lower.contains("groq.com") {
            Self::Groq
        } else if lower.contains("openai.com") {
            Self::OpenAI
        } else {
            Self::Generic
        }
    }

    /// Fill in Azure deployment details. Other providers are returned as is.
    #[must_use]
    pub fn with_azure_deployment(self, deployment: Option<&str>, version: Option<&str>) -> Self {
        match self {
            Self::AzureOpenAI { api_version, .. } => Self::AzureOpenAI {
                deployment_name: deployment.unwrap_or_default().to_string(),
                api_version: version.map_or(api_version, ToString::to_string),
            },
            other => other,
        }
    }

    /// Build the chat completions URL for this provider.
    ///
    /// `base_url` may or may not end with a slash.
    #[must_use]
    pub fn build_chat_url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');

        match self {
            Self::AzureOpenAI {
                deployment_name,
                api_version,
            } => format!(
                "{base}/openai/deployments/{deployment_name}/chat/completions?api-version={api_version}"
            ),
            _ => format!("{base}/v1/chat/completions"),
        }
    }

    /// Attach the API key the way this provider expects it.
    #[must_use]
    pub fn authorize(&self, rb: reqwest::RequestBuilder, api_key: &str) -> reqwest::RequestBuilder {
        match self {
            Self::AzureOpenAI { .. } => rb.header("api-key", api_key),
            _ => rb.bearer_auth(api_key),
        }
    }
}
