use axum::{
    Json, Router,
    extract::{Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::protocol::{ChatReply, ChatRequest};
use crate::reply::{engine_from_config, load_document};

/// Body sent with a 500 when the request cannot be read.
pub const SERVER_ERROR_REPLY: &str = "Erro no servidor";

/// Per-request time limit.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    match &config.llm {
        Some(llm) => info!(
            name: "llm.config.loaded",
            base_url = %llm.base_url,
            model = %llm.model,
            "LLM configuration loaded"
        ),
        None => info!(
            name: "llm.config.absent",
            "No LLM configured, answering with the canned reply"
        ),
    }

    // A missing document degrades answers but should not keep the endpoint down.
    let document = match load_document(&config.knowledge, &reqwest::Client::new()).await {
        Ok(doc) => {
            info!(name: "knowledge.loaded", bytes = doc.len(), "Knowledge document loaded");
            doc
        }
        Err(e) => {
            tracing::error!("Failed to load knowledge document: {e:#}");
            String::new()
        }
    };

    let state = AppState {
        engine: engine_from_config(&config),
        document: Arc::from(document),
        fallback: Arc::from(config.reply.fallback.as_str()),
    };

    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Routes of the reply endpoint.
///
/// The widget posts to the site root; `/chat` is the same handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(chat))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(
            |req: Request, next: Next| async move {
                match tokio::time::timeout(REQUEST_TIMEOUT, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        // The widget is embedded in pages served from other origins.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST / and POST /chat - Reply to a conversation.
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatReply>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(
                name: "chat.request.rejected",
                error = %rejection.body_text(),
                "Malformed chat request"
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply::new(SERVER_ERROR_REPLY)),
            );
        }
    };

    tracing::info!(
        messages = req.messages.len(),
        "Received chat request"
    );

    let document = if req.document.is_empty() {
        &*state.document
    } else {
        req.document.as_str()
    };

    let reply = match state.engine.reply(&req.messages, document).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(name: "chat.reply.failed", "Failed to generate reply: {e:#}");
            state.fallback.to_string()
        }
    };

    (StatusCode::OK, Json(ChatReply::new(reply)))
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
