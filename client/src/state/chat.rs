#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chatwidget::{ChatSurface, Message};
use leptos::prelude::*;

/// Panel state behind the `<ChatWidget/>` component.
///
/// Scroll and focus are DOM side effects that must run after the panel has
/// re-rendered, so the surface only bumps a counter and the component's
/// effects do the work.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub sending: bool,
    pub scroll_requests: u64,
    pub focus_requests: u64,
}

impl ChatState {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn request_scroll(&mut self) {
        self.scroll_requests = self.scroll_requests.wrapping_add(1);
    }

    pub fn request_focus(&mut self) {
        self.focus_requests = self.focus_requests.wrapping_add(1);
    }

    /// Whether the send button should be clickable.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.sending
    }

    /// Panel markup, one entry per line.
    #[must_use]
    pub fn rendered_html(&self) -> Vec<String> {
        self.messages.iter().map(Message::to_html).collect()
    }
}

/// [`ChatSurface`] over the component's signals.
///
/// The text input has its own signal so keystrokes never notify the panel's
/// subscribers.
#[derive(Clone, Copy, Debug)]
pub struct ChatSignal {
    pub state: RwSignal<ChatState>,
    pub input: RwSignal<String>,
}

impl ChatSignal {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ChatState::default()), input: RwSignal::new(String::new()) }
    }
}

impl Default for ChatSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSurface for ChatSignal {
    fn input_value(&self) -> String {
        self.input.get_untracked()
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn append(&self, message: &Message) {
        self.state.update(|c| c.push(message.clone()));
    }

    fn scroll_to_bottom(&self) {
        self.state.update(ChatState::request_scroll);
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.state.update(|c| c.sending = !enabled);
    }

    fn focus_input(&self) {
        self.state.update(ChatState::request_focus);
    }
}
