//! HTTP client used by the widget to reach the reply endpoint.
//!
//! Works on native targets and in the browser (reqwest uses `fetch` on
//! `wasm32`).

use thiserror::Error;
use url::Url;

use crate::protocol::{ChatReply, ChatRequest};

/// Endpoint used when no `CHAT_ENDPOINT` was set at build time.
pub const DEFAULT_ENDPOINT: &str = "https://chatbot-i33c.vercel.app/";

/// Why a reply could not be obtained.
///
/// The widget treats every variant the same way; the distinction only shows
/// up in diagnostics.
#[derive(Debug, Error)]
pub enum RequestFailed {
    /// The endpoint answered with a non-2xx status.
    #[error("request failed: endpoint returned status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The response body was not a valid reply.
    #[error("request failed: invalid reply body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the reply endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use floating_chat::client::ReplyClient;
/// use floating_chat::protocol::{ChatRequest, Message};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReplyClient::new("http://localhost:3000/chat")?;
/// let reply = client.send(&ChatRequest::new(vec![Message::user("hello")])).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReplyClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl ReplyClient {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, url::ParseError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(
        endpoint: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self { endpoint, http })
    }

    /// Client for the endpoint baked in at build time (`CHAT_ENDPOINT`),
    /// falling back to [`DEFAULT_ENDPOINT`].
    pub fn from_build_env() -> Result<Self, url::ParseError> {
        Self::new(option_env!("CHAT_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post `request` and return the bot reply.
    ///
    /// Exactly one request is made. There is no retry and no timeout.
    pub async fn send(&self, request: &ChatRequest) -> Result<String, RequestFailed> {
        let result = self.post(request).await;
        if let Err(err) = &result {
            tracing::error!(
                name: "chat.request.failed",
                endpoint = %self.endpoint,
                error = %err,
                "Reply request failed"
            );
        }
        result
    }

    async fn post(&self, request: &ChatRequest) -> Result<String, RequestFailed> {
        // `json` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(RequestFailed::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailed::Status(status.as_u16()));
        }

        let reply: ChatReply = response.json().await.map_err(RequestFailed::Decode)?;
        Ok(reply.reply)
    }
}
