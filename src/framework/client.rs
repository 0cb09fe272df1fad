//! # Generic Client
//!
//! This module defines the generic client used to send requests to a `ServiceActor`.

use crate::framework::error::FrameworkError;
use crate::framework::message::Response;
use tokio::sync::{mpsc, oneshot};

/// ## ServiceClient
///
/// `ServiceClient<R>` forwards requests of type `R` over a Tokio mpsc channel and waits for
/// the reply on a oneshot channel embedded in the request.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Generic** – works with any request enum.
pub struct ServiceClient<R> {
    sender: mpsc::Sender<R>,
}

impl<R> Clone for ServiceClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Send + 'static> ServiceClient<R> {
    pub fn new(sender: mpsc::Sender<R>) -> Self {
        Self { sender }
    }

    /// Send a request built around a fresh reply channel and wait for the answer.
    ///
    /// ```rust,ignore
    /// let products = client
    ///     .request(|respond_to| CatalogRequest::Snapshot { respond_to })
    ///     .await?;
    /// ```
    pub async fn request<T, F>(&self, build: F) -> Result<T, FrameworkError>
    where
        F: FnOnce(Response<T>) -> R,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}
