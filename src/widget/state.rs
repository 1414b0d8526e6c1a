//! Widget state and the operations that change it.

use crate::client::RequestFailed;
use crate::protocol::{ChatRequest, Message};

/// Bot message appended when a reply could not be obtained.
pub const FALLBACK_REPLY: &str = "Desculpe, houve um erro ao processar sua pergunta.";

/// Ordered, append-only message history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been exchanged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Messages in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// State of one floating chat widget.
#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    open: bool,
    draft: String,
    conversation: Conversation,
}

impl ChatWidget {
    /// Closed widget with an empty draft and no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the message panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Text currently in the input.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Message history.
    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Replace the draft with what the user typed.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Flip between open and closed. Returns the new state.
    ///
    /// The history and the draft are kept either way.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Whether [`submit`](Self::submit) would send anything.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Submit the current draft.
    ///
    /// Returns `None` and changes nothing when the draft is blank. Otherwise
    /// appends the draft as a user message, clears the draft, and returns the
    /// request to post: the whole conversation plus an empty document.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        self.conversation.push(Message::user(content));

        Some(ChatRequest::new(self.conversation.as_slice().to_vec()))
    }

    /// Record the outcome of a request made for an earlier [`submit`].
    ///
    /// Appends the reply as a bot message, or [`FALLBACK_REPLY`] on failure.
    /// Outcomes are appended in the order they arrive.
    ///
    /// [`submit`]: Self::submit
    pub fn resolve(&mut self, outcome: Result<String, RequestFailed>) -> &Message {
        let content = match outcome {
            Ok(reply) => reply,
            Err(_) => FALLBACK_REPLY.to_string(),
        };
        self.conversation.push(Message::bot(content));
        // Just pushed, so the conversation is non-empty.
        &self.conversation.messages[self.conversation.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Sender;

    #[test]
    fn test_blank_draft_is_noop() {
        let mut widget = ChatWidget::new();

        assert!(!widget.can_submit());
        assert!(widget.submit().is_none());

        widget.set_draft("   \n\t ");
        assert!(!widget.can_submit());
        assert!(widget.submit().is_none());
        assert!(widget.conversation().is_empty());
        assert_eq!(widget.draft(), "   \n\t ");
    }

    #[test]
    fn test_submit_appends_user_message_before_reply() {
        let mut widget = ChatWidget::new();
        widget.set_draft("hello");
        assert!(widget.can_submit());

        let request = widget.submit().unwrap();

        assert_eq!(widget.draft(), "");
        assert!(!widget.can_submit());
        assert_eq!(widget.conversation().len(), 1);
        assert_eq!(widget.conversation().last(), Some(&Message::user("hello")));
        assert_eq!(request.messages, vec![Message::user("hello")]);
        assert!(request.document.is_empty());
    }

    #[test]
    fn test_submit_keeps_surrounding_whitespace() {
        let mut widget = ChatWidget::new();
        widget.set_draft("  hello\n");
        widget.submit().unwrap();

        assert_eq!(widget.conversation().as_slice()[0].content, "  hello\n");
    }

    #[test]
    fn test_request_carries_full_history() {
        let mut widget = ChatWidget::new();
        widget.set_draft("first");
        widget.submit().unwrap();
        widget.resolve(Ok("reply".to_string()));

        widget.set_draft("second");
        let request = widget.submit().unwrap();

        assert_eq!(
            request.messages,
            vec![
                Message::user("first"),
                Message::bot("reply"),
                Message::user("second"),
            ]
        );
    }

    #[test]
    fn test_resolve_success() {
        let mut widget = ChatWidget::new();
        widget.set_draft("hello");
        widget.submit().unwrap();

        let message = widget.resolve(Ok("hi there".to_string()));
        assert_eq!(message, &Message::bot("hi there"));
        assert_eq!(widget.conversation().len(), 2);
    }

    #[test]
    fn test_resolve_failure_appends_fallback() {
        let mut widget = ChatWidget::new();
        widget.set_draft("hello");
        widget.submit().unwrap();

        widget.resolve(Err(RequestFailed::Status(500)));

        let messages = widget.conversation().as_slice();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].content, FALLBACK_REPLY);
    }

    #[test]
    fn test_overlapping_replies_append_in_arrival_order() {
        let mut widget = ChatWidget::new();
        widget.set_draft("a");
        widget.submit().unwrap();
        widget.set_draft("b");
        widget.submit().unwrap();

        widget.resolve(Ok("reply to b".to_string()));
        widget.resolve(Ok("reply to a".to_string()));

        let contents: Vec<&str> = widget
            .conversation()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["a", "b", "reply to b", "reply to a"]);
    }

    #[test]
    fn test_toggle_twice_preserves_history() {
        let mut widget = ChatWidget::new();
        assert!(!widget.is_open());

        assert!(widget.toggle());
        widget.set_draft("hello");
        widget.submit().unwrap();
        widget.resolve(Ok("hi".to_string()));

        assert!(!widget.toggle());
        assert!(widget.toggle());
        assert!(!widget.toggle());

        assert!(!widget.is_open());
        assert_eq!(widget.conversation().len(), 2);
    }
}
