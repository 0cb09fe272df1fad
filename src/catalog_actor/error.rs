//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur while loading or reading the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog request never produced a response (connection refused, DNS, timeout).
    #[error("Catalog transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Catalog request failed with status {status}")]
    Status { status: u16 },

    /// The response body was not a valid catalog document.
    #[error("Catalog decode error: {0}")]
    Decode(String),

    /// A product record violated the data contract (e.g. a negative price).
    #[error("Invalid product record: {0}")]
    InvalidProduct(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
