//! # ActorClient Trait
//!
//! Common interface for domain-specific clients: access to the inner generic
//! [`ServiceClient`] plus a mapping from [`FrameworkError`] to the domain error type.
use crate::framework::{FrameworkError, Response, ServiceClient};
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for domain clients built on top of a `ServiceClient`.
///
/// Implementors only provide [`inner`](ActorClient::inner) and
/// [`map_error`](ActorClient::map_error); [`call`](ActorClient::call) is provided.
#[async_trait]
pub trait ActorClient: Send + Sync {
    /// The request enum understood by the actor behind this client.
    type Request: Send + Debug + 'static;

    /// The domain-specific error type.
    type Error: Send;

    /// Access the inner generic ServiceClient.
    fn inner(&self) -> &ServiceClient<Self::Request>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a request and wait for its reply, mapping mailbox failures.
    async fn call<T, F>(&self, build: F) -> Result<T, Self::Error>
    where
        T: Send + 'static,
        F: FnOnce(Response<T>) -> Self::Request + Send + 'static,
    {
        self.inner().request(build).await.map_err(Self::map_error)
    }
}
