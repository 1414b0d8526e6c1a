//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::SparklesIcon;

/// Panel header with the assistant name.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(default = "Chat")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-title">
                <SparklesIcon />
                <span>{title}</span>
            </div>
        </header>
    }
}
