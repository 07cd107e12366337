//! JSON bodies exchanged with the chat endpoint.
//!
//! Request:  `{"message": "<user text>"}`
//! Response: `{"reply": "<assistant text>", ...}` (extra fields ignored)

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::SendError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Serialize the outbound body for `message`.
///
/// # Errors
///
/// Serializing a `&str` field cannot fail in practice; the error is mapped
/// to [`SendError::Parse`] rather than unwrapped.
pub fn encode_request(message: &str) -> Result<String, SendError> {
    serde_json::to_string(&ChatRequest { message }).map_err(|e| SendError::Parse(e.to_string()))
}

/// Map an HTTP status to success or [`SendError::Status`].
///
/// # Errors
///
/// Any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), SendError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SendError::Status { status }) }
}

/// Pull the `reply` string out of a response body.
///
/// # Errors
///
/// Returns [`SendError::Parse`] when the body is not JSON or `reply` is
/// missing or not a string.
pub fn decode_reply(body: &str) -> Result<String, SendError> {
    serde_json::from_str::<ChatReply>(body)
        .map(|r| r.reply)
        .map_err(|e| SendError::Parse(e.to_string()))
}
