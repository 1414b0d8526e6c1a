//! Wire types shared by the widget and the reply endpoint.
//!
//! Field names on the wire are the endpoint's (`mensagens`, `documento`,
//! `resposta`); the Rust side uses English names and maps them with serde.

use serde::{Deserialize, Serialize};

/// Author of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person using the widget.
    #[default]
    User,
    /// Produced by the reply endpoint (or the local fallback).
    Bot,
}

/// One turn in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    #[serde(default)]
    pub sender: Sender,
    /// Message text.
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }

    /// Create a bot message.
    #[must_use]
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            content: content.into(),
        }
    }

    /// Whether this message was written by the user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Request body posted to the reply endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Full conversation, oldest first, including the message just submitted.
    #[serde(rename = "mensagens", default)]
    pub messages: Vec<Message>,
    /// Knowledge document. The widget always sends an empty string and lets
    /// the endpoint use the document it loaded itself.
    #[serde(rename = "documento", default)]
    pub document: String,
}

impl ChatRequest {
    /// Request carrying `messages` and an empty document.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            document: String::new(),
        }
    }
}

/// Response body returned by the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Bot reply text.
    #[serde(rename = "resposta")]
    pub reply: String,
}

impl ChatReply {
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let req = ChatRequest::new(vec![Message::user("oi"), Message::bot("olá")]);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            value,
            json!({
                "mensagens": [
                    { "sender": "user", "content": "oi" },
                    { "sender": "bot", "content": "olá" }
                ],
                "documento": ""
            })
        );
    }

    #[test]
    fn test_request_missing_fields_default() {
        let req: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.messages.is_empty());
        assert!(req.document.is_empty());

        let req: ChatRequest =
            serde_json::from_value(json!({ "mensagens": [{ "content": "sem remetente" }] }))
                .unwrap();
        assert_eq!(req.messages[0].sender, Sender::User);
    }

    #[test]
    fn test_reply_reads_resposta() {
        let reply: ChatReply = serde_json::from_str(r#"{"resposta":"hi there"}"#).unwrap();
        assert_eq!(reply.reply, "hi there");
    }
}
