//! Sender avatar.

use leptos::prelude::*;

use super::{BotIcon, UserIcon};
use crate::protocol::Sender;

/// Round avatar showing who wrote a message.
#[component]
pub fn Avatar(
    /// Message author.
    sender: Sender,
) -> impl IntoView {
    let (class, label) = match sender {
        Sender::User => ("avatar avatar-user", "Você"),
        Sender::Bot => ("avatar avatar-bot", "OlimpIA"),
    };

    view! {
        <span class=class title=label>
            {match sender {
                Sender::User => view! { <UserIcon /> }.into_any(),
                Sender::Bot => view! { <BotIcon /> }.into_any(),
            }}
        </span>
    }
}
