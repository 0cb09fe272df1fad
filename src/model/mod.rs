//! Pure data structures exchanged with the commerce service.

pub mod id;
pub mod order;
pub mod product;

pub use id::*;
pub use order::*;
pub use product::*;
