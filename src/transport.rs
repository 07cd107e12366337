//! Round-trip seam between the widget and the chat endpoint.

use std::rc::Rc;

use crate::error::SendError;

/// One `POST {"message": ...}` exchange, resolved to the `reply` text.
///
/// Implementations must map every failure into [`SendError`]: connection
/// problems to `Network`, non-2xx to `Status`, body problems to `Parse`.
/// Futures are not required to be `Send`; the browser fetch future is not.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    /// Send `message` and return the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns a [`SendError`] for any network, status or parse failure.
    async fn send(&self, message: &str) -> Result<String, SendError>;
}

#[async_trait::async_trait(?Send)]
impl<T: ChatTransport + ?Sized> ChatTransport for &T {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        (**self).send(message).await
    }
}

#[async_trait::async_trait(?Send)]
impl<T: ChatTransport + ?Sized> ChatTransport for Rc<T> {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        (**self).send(message).await
    }
}
