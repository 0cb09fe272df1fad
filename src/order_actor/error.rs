//! Error types for the Order actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while submitting an order.
///
/// Every variant is reported to the caller and broadcast as an `OrderFailed` event;
/// none of them is fatal to the hosting application.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order request never produced a response.
    #[error("Order transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Order request failed with status {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON of the expected shape.
    #[error("Order decode error: {0}")]
    Decode(String),

    /// The response decoded but carried no `order.id`.
    #[error("Order response is missing order.id")]
    MissingOrderId,

    /// A submission for this product is still pending.
    #[error("A submission for product {0} is already in flight")]
    AlreadyInFlight(ProductId),

    /// The product is not part of the loaded catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The catalog has not been loaded successfully, so the product cannot be checked.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
