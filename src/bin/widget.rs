//! Browser entry point: mounts the floating chat on the page body.
//!
//! Built for `wasm32-unknown-unknown` with `--no-default-features --features csr`
//! (see `index.html` for the trunk setup).

use leptos::prelude::*;

use floating_chat::client::ReplyClient;
use floating_chat::ui::FloatingChat;

fn main() {
    let client = match ReplyClient::from_build_env() {
        Ok(client) => client,
        Err(e) => {
            leptos::logging::error!("Invalid CHAT_ENDPOINT: {e}");
            return;
        }
    };

    leptos::mount::mount_to_body(move || view! { <FloatingChat client=client /> });
}
