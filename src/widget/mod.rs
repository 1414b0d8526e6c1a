//! Framework-independent widget state.
//!
//! [`ChatWidget`] owns everything the floating chat needs between renders:
//! the open flag, the draft being typed, and the [`Conversation`]. The Leptos
//! component in [`crate::ui`] wraps it in a signal; tests drive it directly.
//!
//! A submission is split in two so the network call can happen outside the
//! state borrow:
//!
//! 1. [`ChatWidget::submit`] appends the user message and hands back the
//!    [`ChatRequest`](crate::protocol::ChatRequest) to send.
//! 2. [`ChatWidget::resolve`] appends the bot message once the call finishes.

mod keys;
mod state;

pub use keys::KeyAction;
pub use state::{ChatWidget, Conversation, FALLBACK_REPLY};
