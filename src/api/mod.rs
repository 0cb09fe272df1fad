//! The commerce service boundary.
//!
//! [`CommerceApi`] is the only way the actors reach the network. Production code uses
//! [`HttpCommerceApi`]; tests use [`mock::MockCommerceApi`].

pub mod http;
pub mod mock;

pub use http::HttpCommerceApi;

use crate::catalog_actor::CatalogError;
use crate::model::{OrderId, OrderRequest, Product, SubmissionId};
use crate::order_actor::OrderError;
use async_trait::async_trait;

pub const CATALOG_PATH: &str = "/acp/catalog";
pub const ORDERS_PATH: &str = "/acp/orders";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Operations the storefront needs from the commerce service.
#[async_trait]
pub trait CommerceApi: Send + Sync + 'static {
    /// `GET /acp/catalog`. Returns products in server order.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;

    /// `POST /acp/orders`. Returns the `order.id` of the created order.
    ///
    /// `submission_id` is sent as the idempotency key of this attempt.
    async fn create_order(
        &self,
        request: &OrderRequest,
        submission_id: SubmissionId,
    ) -> Result<OrderId, OrderError>;
}
