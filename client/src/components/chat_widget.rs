//! Chat widget component: message panel, text input and send button.

use std::rc::Rc;

use chatwidget::{ChatWidget as Controller, WidgetConfig};
use leptos::prelude::*;

use crate::net::api::GlooTransport;
use crate::state::chat::{ChatSignal, ChatState};

type WidgetController = Controller<ChatSignal, GlooTransport>;

/// Chat panel that posts each message to the configured endpoint and renders
/// the reply.
///
/// The markup follows the card layout the DOM binding expects
/// (`.card-body` panel, `.card-footer` input and button), so the same
/// stylesheet serves both.
#[component]
pub fn ChatWidget(
    /// Endpoint and timeout; defaults to [`chatwidget::DEFAULT_ENDPOINT`].
    #[prop(optional)]
    config: WidgetConfig,
) -> impl IntoView {
    let chat = ChatSignal::new();
    let ChatSignal { state, input } = chat;
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let controller: Rc<WidgetController> = Rc::new(Controller::new(chat, GlooTransport::new(&config)));
    let controller = StoredValue::new_local(controller);

    let scroll_tick = Memo::new(move |_| state.with(|c| c.scroll_requests));
    let focus_tick = Memo::new(move |_| state.with(|c| c.focus_requests));
    let lines = Memo::new(move |_| state.with(ChatState::rendered_html));
    let can_send = Memo::new(move |_| state.with(ChatState::can_send));

    Effect::new(move || {
        let _ = scroll_tick.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = panel_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        let _ = focus_tick.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    tracing::debug!(error = ?e, "failed to focus chat input");
                }
            }
        }
    });

    let do_send = move || {
        let controller = controller.get_value();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            controller.submit().await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = controller;
    };

    let on_click = move |_| do_send();

    let on_keypress = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_send();
        }
    };

    view! {
        <div class="card chat-widget">
            <div class="card-body chat-widget__messages" node_ref=panel_ref>
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .map(|html| view! { <p inner_html=html></p> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="card-footer chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type a message..."
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keypress=on_keypress
                />
                <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=move || !can_send.get()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
