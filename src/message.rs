//! Chat lines and their display forms.
//!
//! ESCAPING
//! ========
//! Only `<` and `>` are replaced before a message is inserted as markup.
//! `&`, quotes and everything else pass through untouched. That keeps the
//! rendered output identical to the widget this replaces; it is not a full
//! HTML escape.

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use std::fmt;

/// Who a chat line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    /// Text typed into the input by the local user.
    You,
    /// A reply returned by the chat endpoint.
    Assistant,
    /// A widget-generated notice, e.g. a send failure.
    System,
}

impl Sender {
    /// Display label used in front of the message text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Assistant => "Assistant",
            Self::System => "System",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rendered chat line. Never stored beyond the panel it lands in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    #[must_use]
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { sender, text: text.into() }
    }

    #[must_use]
    pub fn you(text: impl Into<String>) -> Self {
        Self::new(Sender::You, text)
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text)
    }

    /// Markup for the panel: `<b>{sender}:</b> {text}` with the text passed
    /// through [`escape_angle_brackets`].
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<b>{}:</b> {}", self.sender, escape_angle_brackets(&self.text))
    }

    /// Terminal form: `{sender}: {text}`, unescaped.
    #[must_use]
    pub fn to_plain(&self) -> String {
        format!("{}: {}", self.sender, self.text)
    }
}

/// Replace `<` with `&lt;` and `>` with `&gt;`. Nothing else is touched.
#[must_use]
pub fn escape_angle_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
