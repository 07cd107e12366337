//! Leptos components.

pub mod chat_widget;
