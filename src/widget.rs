//! The chat widget controller.
//!
//! DESIGN
//! ======
//! The widget owns no UI itself. A host hands it a [`ChatSurface`] (panel,
//! input, send control) and a [`ChatTransport`] (the HTTP round-trip), then
//! calls [`ChatWidget::submit`] from both the click and the Enter trigger.
//!
//! Everything runs on the host's event loop. The transport await is the only
//! suspension point, so the `sending` flag is a plain `Cell`.
//!
//! IN-FLIGHT GUARD
//! ===============
//! Disabling the send control only blocks clicks. The Enter trigger reaches
//! `submit` regardless, so `submit` itself refuses to start while a request
//! is outstanding and leaves the input untouched.

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

use std::cell::Cell;

use crate::error::SendError;
use crate::message::{Message, Sender};
use crate::transport::ChatTransport;

/// Trimmed from the input along with whitespace.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// The DOM-like pieces a widget drives: a scrollable panel, a text input and
/// a send control.
///
/// Methods take `&self`; hosts use signals or interior mutability.
pub trait ChatSurface {
    /// Current raw value of the text input.
    fn input_value(&self) -> String;
    fn clear_input(&self);
    /// Append one line to the message panel.
    fn append(&self, message: &Message);
    /// Scroll the panel to its maximum offset.
    fn scroll_to_bottom(&self);
    fn set_send_enabled(&self, enabled: bool);
    fn focus_input(&self);
}

/// What a call to [`ChatWidget::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming. Nothing rendered, nothing sent.
    Empty,
    /// A request was already outstanding. Nothing rendered, nothing sent.
    Busy,
    /// The endpoint replied and an `Assistant` line was rendered.
    Replied,
    /// The round-trip failed and a `System` line was rendered.
    Failed(SendError),
}

pub struct ChatWidget<S, T> {
    surface: S,
    transport: T,
    sending: Cell<bool>,
}

impl<S: ChatSurface, T: ChatTransport> ChatWidget<S, T> {
    /// Attach a widget to `surface`. The send control starts enabled.
    pub fn new(surface: S, transport: T) -> Self {
        surface.set_send_enabled(true);
        Self { surface, transport, sending: Cell::new(false) }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.transport)
    }

    /// True while a request is outstanding.
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Append `text` under `sender` and scroll the panel to the bottom.
    pub fn render_message(&self, sender: Sender, text: &str) {
        self.surface.append(&Message::new(sender, text));
        self.surface.scroll_to_bottom();
    }

    /// Send the current input to the endpoint and render the outcome.
    ///
    /// Never returns an error: failures are rendered as a `System` line and
    /// reported through [`SubmitOutcome::Failed`]. Once a request has been
    /// issued the send control is re-enabled and the input refocused on
    /// every path.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.sending.get() {
            tracing::debug!("chat submit ignored: request in flight");
            return SubmitOutcome::Busy;
        }

        let raw = self.surface.input_value();
        let text = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        let text = text.to_owned();

        self.render_message(Sender::You, &text);
        self.surface.clear_input();
        self.set_sending(true);
        tracing::debug!(len = text.len(), "chat submit accepted");

        let outcome = match self.transport.send(&text).await {
            Ok(reply) => {
                tracing::debug!(len = reply.len(), "chat reply received");
                self.render_message(Sender::Assistant, &reply);
                SubmitOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(error = %e, retryable = e.is_retryable(), "chat send failed");
                self.render_message(Sender::System, &e.user_message());
                SubmitOutcome::Failed(e)
            }
        };

        self.set_sending(false);
        self.surface.focus_input();
        outcome
    }

    fn set_sending(&self, sending: bool) {
        self.sending.set(sending);
        self.surface.set_send_enabled(!sending);
    }
}
