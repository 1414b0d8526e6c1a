//! Floating chat root component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::ReplyClient;
use crate::ui::chat::{ChatHeader, ChatInputArea, ChatMessageList};
use crate::ui::components::{Button, ButtonVariant, ChatIcon, XIcon};
use crate::widget::ChatWidget;

/// Floating chat widget.
///
/// Renders the toggle button and, when open, the chat panel. Each
/// submission spawns one request; replies are appended as they arrive and
/// the input stays usable meanwhile.
///
/// # Example
///
/// ```rust,ignore
/// let client = ReplyClient::new("https://example.com/chat")?;
/// view! { <FloatingChat client=client /> }
/// ```
#[component]
pub fn FloatingChat(
    /// Client for the reply endpoint.
    client: ReplyClient,
    /// Title shown in the panel header.
    #[prop(default = "OlimpIA")]
    title: &'static str,
) -> impl IntoView {
    let widget = RwSignal::new(ChatWidget::new());
    let client = StoredValue::new(client);

    let is_open = Memo::new(move |_| widget.with(ChatWidget::is_open));
    let messages = Memo::new(move |_| {
        widget.with(|w| w.conversation().as_slice().to_vec())
    });

    let toggle = Callback::new(move |()| {
        widget.update(|w| {
            w.toggle();
        });
    });

    let submit = Callback::new(move |()| {
        // Blank drafts must not notify subscribers.
        if !widget.with(ChatWidget::can_submit) {
            return;
        }
        let Some(request) = widget.try_update(ChatWidget::submit).flatten() else {
            return;
        };
        let client = client.get_value();

        spawn_local(async move {
            let outcome = client.send(&request).await;
            if let Err(err) = &outcome {
                leptos::logging::error!("Erro: {err}");
            }
            // No-op once the widget has been unmounted.
            let _ = widget.try_update(|w| {
                w.resolve(outcome);
            });
        });
    });

    view! {
        <div class="floating-chat-container">
            <Button
                variant=ButtonVariant::Fab
                class="chat-toggle-button"
                label="Abrir ou fechar o chat"
                on_click=toggle
            >
                <Show when=move || is_open.get() fallback=|| view! { <ChatIcon class="icon-lg" /> }>
                    <XIcon class="icon-lg" />
                </Show>
            </Button>

            <Show when=move || is_open.get()>
                <div class="chat-box" role="dialog" aria-label=title>
                    <ChatHeader title=title />
                    <ChatMessageList messages=messages />
                    <ChatInputArea widget=widget on_submit=submit />
                </div>
            </Show>
        </div>
    }
}
