//! # Order Actor
//!
//! Places single-item orders against the commerce service.
//!
//! ## Overview
//!
//! `submit(product_id)` builds `{"items":[{"product_id": <id>, "quantity": 1}]}`, posts it
//! with a fresh idempotency key and resolves to the `order.id` the service returns. Every
//! failure is returned as an [`OrderError`] and broadcast as
//! [`StorefrontEvent::OrderFailed`](crate::events::StorefrontEvent::OrderFailed); nothing
//! is retried.
//!
//! Idempotency is **not** guaranteed across submissions: two clicks on the same product
//! (one after the other) are two orders with unrelated keys. While a submission is pending,
//! a second one for the same product is rejected with [`OrderError::AlreadyInFlight`]
//! unless the guard is switched off in [`StorefrontConfig`](crate::config::StorefrontConfig).
//!
//! ## Structure
//!
//! - [`service`] - [`ActorService`](crate::framework::ActorService) implementation
//! - [`requests`] - [`OrderCommand`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and its client

pub mod error;
pub mod requests;
pub mod service;

pub use error::*;
pub use requests::*;
pub use service::{OrderContext, OrderService};

use crate::clients::OrderClient;
use crate::framework::ServiceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ServiceActor<OrderService>, OrderClient) {
    let (actor, inner) = ServiceActor::new(OrderService::new(), buffer_size);
    (actor, OrderClient::new(inner))
}
