//! Chat message list component.

use leptos::html::Div;
use leptos::prelude::*;

use crate::protocol::Message;
use crate::ui::components::Avatar;

/// Shown while the conversation is empty.
const EMPTY_HINT: &str = "Nenhuma mensagem ainda. Comece a conversar!";

/// Scrollable list of messages.
///
/// Scrolls to the newest message when mounted (the panel was just opened)
/// and whenever `messages` changes.
#[component]
pub fn ChatMessageList(
    /// Conversation to render, oldest first.
    messages: Memo<Vec<Message>>,
) -> impl IntoView {
    let end_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        messages.track();
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    view! {
        <div class="chat-messages" aria-live="polite" aria-label="Mensagens">
            <Show
                when=move || messages.with(|m| !m.is_empty())
                fallback=|| view! { <div class="empty-messages">{EMPTY_HINT}</div> }
            >
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, message)| view! { <MessageRow message=message /> }
                />
            </Show>
            <div node_ref=end_ref />
        </div>
    }
}

/// One message with its avatar.
#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let side = if message.is_user() { "user" } else { "bot" };

    view! {
        <div class=format!("message-wrapper {side}")>
            <Avatar sender=message.sender />
            <div class="message">{message.content}</div>
        </div>
    }
}
