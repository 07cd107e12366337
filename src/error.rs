//! Send-failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Prefix put in front of every failure shown in the panel.
pub const FAILURE_PREFIX: &str = "Sorry, error: ";

/// Errors produced by a single chat round-trip.
///
/// Every variant is surfaced the same way: a `System` line built by
/// [`SendError::user_message`]. None of them leave the widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request never produced a response (DNS, refused, reset, timeout).
    #[error("{0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The body was not JSON or had no string `reply` field.
    #[error("invalid reply: {0}")]
    Parse(String),
}

impl SendError {
    /// Text of the `System` line shown for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("{FAILURE_PREFIX}{self}")
    }

    /// Whether a later identical submission could plausibly succeed.
    /// Only reported in logs; nothing retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { status: 408 | 429 | 500..=599 })
    }
}

/// Errors produced while building a [`crate::WidgetConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("chat endpoint is empty")]
    EmptyEndpoint,

    #[error("chat endpoint must be an http(s) URL: {0}")]
    UnsupportedScheme(String),

    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}
