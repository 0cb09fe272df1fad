//! # Storefront Client
//!
//! > **Catalog in, orders out.**
//!
//! Client core of a storefront: it retrieves the product catalog from a commerce service
//! (`GET /acp/catalog`) and places single-item orders for catalog products
//! (`POST /acp/orders`). Rendering is somebody else's job; this crate only produces
//! structured results and [`events::StorefrontEvent`]s.
//!
//! ## Architecture Notes
//!
//! ### 1. Actors
//! The catalog and the order submitter each live in a [`framework::ServiceActor`] that owns
//! their state and handles one request at a time. Long-running HTTP calls are spawned as
//! tasks that report back through the actor's [`framework::Mailbox`], so the actors stay
//! responsive while a request is in flight.
//!
//! ### 2. Type-Safe Error Handling
//! Each actor has its own error enum ([`catalog_actor::CatalogError`],
//! [`order_actor::OrderError`]). Mailbox failures surface as the enum's
//! `ActorCommunicationError` variant.
//!
//! ### 3. Context Injection
//! Dependencies (the [`api::CommerceApi`], the event bus, the catalog client) are handed to
//! `run()` rather than to the constructor. Tests swap in [`api::mock::MockCommerceApi`].
//!
//! ### 4. Observability
//! `tracing` everywhere; see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor run loop, clients and test helpers.
//! - [`model`]: products, the catalog, order wire types and identifiers.
//! - [`api`]: the commerce service boundary, over HTTP or mocked.
//! - [`catalog_actor`], [`order_actor`]: the two domain actors.
//! - [`clients`]: [`CatalogClient`](clients::CatalogClient) and
//!   [`OrderClient`](clients::OrderClient).
//! - [`lifecycle`]: [`Storefront`](lifecycle::Storefront) wires and stops everything.
//! - [`config`], [`events`].
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod api;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod events;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
