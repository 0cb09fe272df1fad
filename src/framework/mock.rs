//! # Mock Framework & Testing Guide
//!
//! Actors are asynchronous, which makes the code *around* them awkward to test. This module
//! lets a test stand in for the actor: it hands out a real [`ServiceClient`] whose requests
//! arrive on a receiver the test controls.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock receiver | Real Actor |
//! |---------|---------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Test decides every reply | Subject to scheduler |
//! | **Use Case** | Client wrappers (`OrderClient`, `CatalogClient`) | Service logic or full system |
//! | **Error Injection** | Drop the responder, reply with any error | Requires specific state |
//!
//! ## Example
//!
//! ```rust
//! use storefront_client::framework::mock::{create_mock_client, next_request};
//! use storefront_client::framework::Response;
//!
//! #[derive(Debug)]
//! enum PingRequest {
//!     Ping { respond_to: Response<u32> },
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<PingRequest>(4);
//!
//!     let task = tokio::spawn(async move {
//!         client.request(|respond_to| PingRequest::Ping { respond_to }).await
//!     });
//!
//!     let PingRequest::Ping { respond_to } = next_request(&mut receiver).await.unwrap();
//!     respond_to.send(7).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap(), 7);
//! }
//! ```
//!
//! For the network boundary, see [`crate::api::mock::MockCommerceApi`].

use crate::framework::ServiceClient;
use std::time::Duration;
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
///
/// No actor is spawned; the test plays the actor's role by reading from `receiver`
/// and answering through the embedded responders.
pub fn create_mock_client<R: Send + 'static>(
    buffer_size: usize,
) -> (ServiceClient<R>, mpsc::Receiver<R>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::new(sender), receiver)
}

/// Waits (at most one second) for the next request on a mock receiver.
///
/// Returns `None` on timeout or when every client has been dropped.
pub async fn next_request<R>(receiver: &mut mpsc::Receiver<R>) -> Option<R> {
    tokio::time::timeout(Duration::from_secs(1), receiver.recv())
        .await
        .ok()
        .flatten()
}
