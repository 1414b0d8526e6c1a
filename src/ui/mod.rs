//! UI components.
//!
//! Leptos components rendering the floating chat in the browser. State lives
//! in a [`ChatWidget`](crate::widget::ChatWidget) held by a signal; the
//! components only bind events and render.
//!
//! # Structure
//!
//! - [`FloatingChat`]: root component (toggle button and panel)
//! - [`chat`]: panel parts (header, message list, input area)
//! - [`components`]: small reusable pieces (button, avatar, icons)

pub mod chat;
pub mod components;
mod floating_chat;

pub use floating_chat::FloatingChat;
