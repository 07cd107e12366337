//! Client-side state for the chat component.

pub mod chat;
