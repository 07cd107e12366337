//! Binding to a chat card that already exists in the page.
//!
//! The host page provides the markup; this module finds the three pieces by
//! selector, wraps them as a [`chatwidget::ChatSurface`] and registers the
//! click and Enter listeners. Listeners live as long as the page; there is
//! no teardown.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Scrollable panel that receives one `<p>` per message.
pub const PANEL_SELECTOR: &str = ".card-body";
/// Text input the user types into.
pub const INPUT_SELECTOR: &str = ".card-footer input";
/// Button that submits the input.
pub const SEND_SELECTOR: &str = ".card-footer button";

/// Errors produced while binding to the container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no element matches `{0}` inside the chat container")]
    Missing(&'static str),

    #[error("element matching `{0}` has the wrong type")]
    WrongType(&'static str),

    #[error("invalid chat endpoint: {0}")]
    Config(#[from] chatwidget::ConfigError),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

/// Build the widget configuration for an entry point's optional endpoint.
///
/// # Errors
///
/// Returns [`BindError::Config`] if `endpoint` is blank or not http(s).
pub fn widget_config(endpoint: Option<&str>) -> Result<chatwidget::WidgetConfig, BindError> {
    match endpoint {
        Some(endpoint) => Ok(chatwidget::WidgetConfig::new(endpoint)?),
        None => Ok(chatwidget::WidgetConfig::default()),
    }
}

#[cfg(feature = "csr")]
pub use browser::{DomSurface, init_chat};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use chatwidget::{ChatSurface, ChatWidget, Message};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent};

    use super::{BindError, INPUT_SELECTOR, PANEL_SELECTOR, SEND_SELECTOR};
    use crate::net::api::GlooTransport;

    fn dom_error(e: JsValue) -> BindError {
        BindError::Dom(format!("{e:?}"))
    }

    fn find<T: JsCast>(container: &Element, selector: &'static str) -> Result<T, BindError> {
        container
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or(BindError::Missing(selector))?
            .dyn_into::<T>()
            .map_err(|_| BindError::WrongType(selector))
    }

    /// [`ChatSurface`] over the panel, input and button of an existing card.
    pub struct DomSurface {
        document: Document,
        panel: HtmlElement,
        input: HtmlInputElement,
        send: HtmlButtonElement,
    }

    impl DomSurface {
        /// Locate the panel, input and send button inside `container`.
        ///
        /// # Errors
        ///
        /// Returns [`BindError`] if an element is missing or of the wrong type.
        pub fn bind(container: &Element) -> Result<Self, BindError> {
            let document = container.owner_document().ok_or_else(|| BindError::Dom("container is detached".into()))?;
            Ok(Self {
                document,
                panel: find(container, PANEL_SELECTOR)?,
                input: find(container, INPUT_SELECTOR)?,
                send: find(container, SEND_SELECTOR)?,
            })
        }
    }

    impl ChatSurface for DomSurface {
        fn input_value(&self) -> String {
            self.input.value()
        }

        fn clear_input(&self) {
            self.input.set_value("");
        }

        fn append(&self, message: &Message) {
            let line = match self.document.create_element("p") {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = ?e, "failed to create chat line");
                    return;
                }
            };
            line.set_inner_html(&message.to_html());
            if let Err(e) = self.panel.append_child(&line) {
                tracing::warn!(error = ?e, "failed to append chat line");
            }
        }

        fn scroll_to_bottom(&self) {
            self.panel.set_scroll_top(self.panel.scroll_height());
        }

        fn set_send_enabled(&self, enabled: bool) {
            self.send.set_disabled(!enabled);
        }

        fn focus_input(&self) {
            if let Err(e) = self.input.focus() {
                tracing::debug!(error = ?e, "failed to focus chat input");
            }
        }
    }

    type DomWidget = ChatWidget<DomSurface, GlooTransport>;

    fn spawn_submit(widget: &Rc<DomWidget>) {
        let widget = Rc::clone(widget);
        wasm_bindgen_futures::spawn_local(async move {
            widget.submit().await;
        });
    }

    /// Wire a chat card already present in the page.
    ///
    /// `endpoint` defaults to [`chatwidget::DEFAULT_ENDPOINT`] when omitted.
    ///
    /// # Errors
    ///
    /// Throws a JS error string if the card markup is incomplete, the
    /// endpoint is invalid, or a listener cannot be registered.
    #[wasm_bindgen(js_name = initChat)]
    pub fn init_chat(container: Element, endpoint: Option<String>) -> Result<(), JsValue> {
        crate::init_browser_logging();
        bind_and_listen(&container, endpoint.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn bind_and_listen(container: &Element, endpoint: Option<&str>) -> Result<(), BindError> {
        let config = super::widget_config(endpoint)?;
        let surface = DomSurface::bind(container)?;
        let input = surface.input.clone();
        let send = surface.send.clone();
        let widget = Rc::new(ChatWidget::new(surface, GlooTransport::new(&config)));

        let on_click = {
            let widget = Rc::clone(&widget);
            Closure::wrap(Box::new(move || spawn_submit(&widget)) as Box<dyn FnMut()>)
        };
        send.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        on_click.forget();

        let on_keypress = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                spawn_submit(&widget);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        input
            .add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        on_keypress.forget();

        tracing::info!(endpoint = %config.endpoint, "chat widget attached");
        Ok(())
    }
}
