//! Floating chat widget and its reply endpoint.
//!
//! A toggle button that opens a message panel on a web page. Each submission
//! posts the whole conversation to a reply endpoint and appends the answer.
//!
//! # Architecture
//!
//! - **Widget**: framework-independent state plus a Leptos component (CSR)
//! - **Client**: one `POST` per submission, failures become a fallback message
//! - **Endpoint** (feature `server`): Axum service answering with a canned
//!   reply or an `OpenAI`-compatible chat completion
//!
//! # Modules
//!
//! - [`protocol`]: wire types shared by widget and endpoint
//! - [`widget`]: open flag, draft, conversation, keyboard mapping
//! - [`client`]: HTTP client for the endpoint
//! - [`ui`]: Leptos components
//! - [`reply`], [`server`], [`config`]: the endpoint

#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod client;
pub mod protocol;
pub mod ui;
pub mod widget;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod reply;
#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
use std::sync::Arc;

/// Application state shared across all handlers.
#[cfg(feature = "server")]
#[derive(Clone, Debug)]
pub struct AppState {
    /// Produces replies.
    pub engine: Arc<dyn reply::ReplyEngine>,
    /// Knowledge document loaded at startup.
    pub document: Arc<str>,
    /// Reply sent when the engine fails.
    pub fallback: Arc<str>,
}
