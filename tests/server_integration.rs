use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use floating_chat::AppState;
use floating_chat::protocol::{ChatReply, Message};
use floating_chat::reply::{CannedReply, ReplyEngine};
use floating_chat::server::{SERVER_ERROR_REPLY, router};

const FALLBACK: &str = "Desculpe, houve um erro ao processar sua mensagem.";

/// Replies with the document it was given and the number of messages.
#[derive(Debug)]
struct DocumentEcho;

#[async_trait::async_trait]
impl ReplyEngine for DocumentEcho {
    async fn reply(&self, messages: &[Message], document: &str) -> anyhow::Result<String> {
        Ok(format!("{}|{document}", messages.len()))
    }
}

#[derive(Debug)]
struct Failing;

#[async_trait::async_trait]
impl ReplyEngine for Failing {
    async fn reply(&self, _messages: &[Message], _document: &str) -> anyhow::Result<String> {
        anyhow::bail!("upstream unavailable")
    }
}

fn server(engine: Arc<dyn ReplyEngine>, document: &str) -> TestServer {
    let state = AppState {
        engine,
        document: Arc::from(document),
        fallback: Arc::from(FALLBACK),
    };
    TestServer::new(router(state)).expect("test server")
}

#[tokio::test]
async fn test_canned_reply_on_root_and_chat() {
    let server = server(Arc::new(CannedReply::new("Resposta do bot")), "");

    for path in ["/", "/chat"] {
        let response = server
            .post(path)
            .json(&json!({
                "mensagens": [{ "sender": "user", "content": "oi" }],
                "documento": ""
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "resposta": "Resposta do bot" }));
    }
}

#[tokio::test]
async fn test_server_document_used_when_request_empty() {
    let server = server(Arc::new(DocumentEcho), "catálogo de peças");

    let reply: ChatReply = server
        .post("/chat")
        .json(&json!({
            "mensagens": [
                { "sender": "user", "content": "oi" },
                { "sender": "bot", "content": "olá" },
                { "sender": "user", "content": "tem freio?" }
            ],
            "documento": ""
        }))
        .await
        .json();

    assert_eq!(reply.reply, "3|catálogo de peças");
}

#[tokio::test]
async fn test_request_document_takes_precedence() {
    let server = server(Arc::new(DocumentEcho), "catálogo de peças");

    let reply: ChatReply = server
        .post("/chat")
        .json(&json!({ "mensagens": [], "documento": "outro documento" }))
        .await
        .json();

    assert_eq!(reply.reply, "0|outro documento");
}

#[tokio::test]
async fn test_missing_fields_default() {
    let server = server(Arc::new(DocumentEcho), "");

    let reply: ChatReply = server.post("/chat").json(&json!({})).await.json();
    assert_eq!(reply.reply, "0|");
}

#[tokio::test]
async fn test_engine_failure_returns_fallback() {
    let server = server(Arc::new(Failing), "");

    let response = server
        .post("/chat")
        .json(&json!({ "mensagens": [{ "sender": "user", "content": "oi" }] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "resposta": FALLBACK }));
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let server = server(Arc::new(CannedReply::new("unused")), "");

    let response = server.post("/chat").text("isto não é json").expect_failure().await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "resposta": SERVER_ERROR_REPLY }));
}

#[tokio::test]
async fn test_health() {
    let server = server(Arc::new(CannedReply::new("unused")), "");

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}
