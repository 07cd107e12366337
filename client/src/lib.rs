//! # client
//!
//! Leptos + WASM front end for the chat widget in the root `chatwidget`
//! crate. Two ways in:
//!
//! - `initChat(container, endpoint?)` wires a chat card that already exists
//!   in the page (see [`dom`]).
//! - `mountChat(container, endpoint?)` renders the [`components::chat_widget::ChatWidget`]
//!   component into an empty element.
//!
//! Both use the browser `fetch` transport in [`net::api`].

pub mod components;
pub mod dom;
pub mod net;
pub mod state;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Install the panic hook and route `tracing` events to the browser console.
/// Safe to call more than once.
#[cfg(feature = "csr")]
pub(crate) fn init_browser_logging() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    });
}

/// Render a `<ChatWidget/>` into `container`.
///
/// # Errors
///
/// Throws a JS error string if `endpoint` is invalid; nothing is mounted.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = mountChat)]
pub fn mount_chat(container: web_sys::HtmlElement, endpoint: Option<String>) -> Result<(), JsValue> {
    use leptos::prelude::*;

    use components::chat_widget::ChatWidget;

    init_browser_logging();
    let config = dom::widget_config(endpoint.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    leptos::mount::mount_to(container, move || view! { <ChatWidget config=config/> }).forget();
    Ok(())
}
