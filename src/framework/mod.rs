//! Generic actor runtime.
//!
//! This module provides the building blocks the storefront actors are made of.
//!
//! # Main Components
//!
//! - [`ActorService`] - Trait a state machine implements to be driven by an actor
//! - [`ServiceActor`] - Generic run loop that owns the service and its mailbox
//! - [`ServiceClient`] - Cloneable, type-safe handle for sending requests
//! - [`ActorClient`] - Trait for domain clients wrapping a `ServiceClient`
//! - [`FrameworkError`] - Mailbox failures (closed actor, dropped reply)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod service;

pub use actor::ServiceActor;
pub use client::ServiceClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::Response;
pub use service::{ActorService, Mailbox};
