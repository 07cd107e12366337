//! `reqwest` transport for the chat endpoint.

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use chatwidget::wire::{self, CONTENT_TYPE_JSON};
use chatwidget::{ChatTransport, SendError, WidgetConfig};
use reqwest::header::CONTENT_TYPE;

pub struct ReqwestTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl ReqwestTransport {
    /// Build a client for `config.endpoint`. A request timeout is applied
    /// only when the config carries one.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: &WidgetConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, endpoint: config.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for ReqwestTransport {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        let body = wire::encode_request(message)?;
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        wire::check_status(response.status().as_u16())?;
        let text = response
            .text()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        wire::decode_reply(&text)
    }
}
