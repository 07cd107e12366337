//! Browser transport for the chat endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): a stub that always fails with a network
//! error, since `fetch` only exists in the browser.
//!
//! TIMEOUT
//! =======
//! `fetch` has no timeout of its own. When the config carries one, the
//! round-trip races a `gloo-timers` timer and the loser is dropped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use chatwidget::{ChatTransport, SendError, WidgetConfig};

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "HTTP is only available in the browser";

#[cfg(any(test, feature = "csr"))]
fn timed_out(timeout: Duration) -> SendError {
    SendError::Network(format!("request timed out after {}ms", timeout.as_millis()))
}

#[cfg(any(test, feature = "csr"))]
fn network_error(e: impl std::fmt::Display) -> SendError {
    SendError::Network(e.to_string())
}

pub struct GlooTransport {
    endpoint: String,
    timeout: Option<Duration>,
}

impl GlooTransport {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { endpoint: config.endpoint.clone(), timeout: config.request_timeout }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[cfg(feature = "csr")]
    async fn round_trip(&self, message: &str) -> Result<String, SendError> {
        use chatwidget::wire::{self, CONTENT_TYPE_JSON};

        let body = wire::encode_request(message)?;
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .body(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        wire::check_status(resp.status())?;
        let text = resp.text().await.map_err(network_error)?;
        wire::decode_reply(&text)
    }

    #[cfg(not(feature = "csr"))]
    async fn round_trip(&self, message: &str) -> Result<String, SendError> {
        let _ = message;
        Err(SendError::Network(UNAVAILABLE.to_owned()))
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        let Some(timeout) = self.timeout else {
            return self.round_trip(message).await;
        };

        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_timers::future::TimeoutFuture;

            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            let request = std::pin::pin!(self.round_trip(message));
            let timer = std::pin::pin!(TimeoutFuture::new(millis));
            match select(request, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(timed_out(timeout)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = timeout;
            self.round_trip(message).await
        }
    }
}
