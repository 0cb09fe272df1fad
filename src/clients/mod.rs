//! Type-safe wrappers around [`ServiceClient`](crate::framework::ServiceClient).

pub mod catalog_client;
pub mod order_client;

pub use catalog_client::*;
pub use order_client::*;
