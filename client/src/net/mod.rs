//! Network layer: the browser-side HTTP transport.

pub mod api;
