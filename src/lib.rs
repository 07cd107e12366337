//! # chatwidget
//!
//! Host-independent core of a small chat widget: a message panel, a text
//! input and a send control wired to one HTTP endpoint that answers
//! `{"message": ...}` with `{"reply": ...}`.
//!
//! The crate owns message rendering, the `sending` flag, the submit flow and
//! the failure taxonomy. Hosts supply the UI through [`ChatSurface`] and the
//! network through [`ChatTransport`]:
//!
//! - `client/` binds it to the browser DOM and to Leptos.
//! - `cli/` drives it from a terminal.

pub mod config;
pub mod error;
pub mod message;
pub mod transport;
pub mod widget;
pub mod wire;

pub use config::{DEFAULT_ENDPOINT, WidgetConfig};
pub use error::{ConfigError, SendError};
pub use message::{Message, Sender, escape_angle_brackets};
pub use transport::ChatTransport;
pub use widget::{ChatSurface, ChatWidget, SubmitOutcome};
