//! Chat input area component.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, SendIcon};
use crate::widget::{ChatWidget, KeyAction};

/// Draft input and send button.
///
/// Enter submits, Shift+Enter inserts a line break.
#[component]
pub fn ChatInputArea(
    /// Widget state; the draft is read from and written to it.
    widget: RwSignal<ChatWidget>,
    /// Called to submit the draft.
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        let action = KeyAction::from_key(&ev.key(), ev.shift_key());
        if action.prevents_default() {
            ev.prevent_default();
        }
        if action == KeyAction::Submit {
            on_submit.run(());
        }
    };

    view! {
        <div class="input-area">
            <textarea
                class="message-input"
                placeholder="Digite sua pergunta..."
                rows="1"
                prop:value=move || widget.with(|w| w.draft().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    widget.update(|w| w.set_draft(value));
                }
                on:keydown=on_keydown
            />

            <Button variant=ButtonVariant::Primary class="send-button" label="Enviar" on_click=on_submit>
                <SendIcon />
                <span>"Enviar"</span>
            </Button>
        </div>
    }
}
