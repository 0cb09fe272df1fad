//! Wiring, startup and shutdown of the storefront actors.

pub mod storefront;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storefront::{Storefront, StorefrontError};
