//! Widget configuration.
//!
//! The endpoint used to be a literal inside the send path. It is now a value
//! handed to the widget by its host, with [`DEFAULT_ENDPOINT`] as fallback.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/chat";

pub const ENDPOINT_ENV: &str = "CHAT_ENDPOINT";
pub const REQUEST_TIMEOUT_ENV: &str = "CHAT_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Absolute URL that receives `POST {"message": ...}`.
    pub endpoint: String,
    /// Upper bound for one round-trip. `None` lets a request run until the
    /// transport gives up on its own, which can leave the widget in the
    /// sending state indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_owned(), request_timeout: None }
    }
}

impl WidgetConfig {
    /// Config for `endpoint` with no timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the endpoint is blank or not http(s).
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self { endpoint: validate_endpoint(endpoint)?, request_timeout: None })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_ENDPOINT`: defaults to [`DEFAULT_ENDPOINT`]
    /// - `CHAT_REQUEST_TIMEOUT_SECS`: positive integer, unset means no timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        let timeout = parse_timeout_secs(std::env::var(REQUEST_TIMEOUT_ENV).ok().as_deref())?;
        Ok(Self::new(&endpoint)?.with_request_timeout(timeout))
    }
}

fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(ConfigError::EmptyEndpoint);
    }
    let lower = endpoint.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(endpoint.to_owned()));
    }
    Ok(endpoint.to_owned())
}

/// Parse a timeout in whole seconds. `None` and blank mean "no timeout".
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for zero or non-numeric input.
pub fn parse_timeout_secs(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidValue { var: REQUEST_TIMEOUT_ENV, value: raw.to_owned() }),
    }
}
