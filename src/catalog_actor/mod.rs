//! # Catalog Actor
//!
//! Owns the product catalog and its loading lifecycle.
//!
//! ## Overview
//!
//! The catalog is retrieved exactly once, when the owning context calls `initialize()`.
//! Until that retrieval succeeds the held collection is empty; afterwards it is a read-only
//! snapshot in server order. A failed retrieval is recorded as
//! [`CatalogStatus::Failed`] and never retried.
//!
//! ## Structure
//!
//! - [`service`] - [`ActorService`](crate::framework::ActorService) implementation
//! - [`requests`] - [`CatalogRequest`], [`CatalogStatus`], [`ProductLookup`]
//! - [`error`] - [`CatalogError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_client::api::mock::MockCommerceApi;
//! use storefront_client::catalog_actor::{self, CatalogContext};
//! use storefront_client::events::EventBus;
//! use storefront_client::model::Product;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = Arc::new(MockCommerceApi::new());
//!     api.expect_catalog()
//!         .return_ok(vec![Product::new(1, "Pen", 10.0, "Stationery")]);
//!
//!     let (actor, client) = catalog_actor::new(32);
//!     tokio::spawn(actor.run(CatalogContext { api, events: EventBus::new(8) }));
//!
//!     let catalog = client.initialize().await.unwrap();
//!     assert_eq!(catalog.products()[0].name, "Pen");
//! }
//! ```

pub mod error;
pub mod requests;
pub mod service;

pub use error::*;
pub use requests::*;
pub use service::{CatalogContext, CatalogService};

use crate::clients::CatalogClient;
use crate::framework::ServiceActor;

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (ServiceActor<CatalogService>, CatalogClient) {
    let (actor, inner) = ServiceActor::new(CatalogService::new(), buffer_size);
    (actor, CatalogClient::new(inner))
}
