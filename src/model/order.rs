//! Order placement payloads.
//!
//! An [`OrderRequest`] is built right before submission and discarded once the response has
//! been handled. The service answers with an [`OrderResponse`], of which only `order.id` is
//! read.
use crate::model::{OrderId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Fixed quantity for a single-item submission.
pub const SINGLE_ITEM_QUANTITY: u32 = 1;

/// One `{product_id, quantity}` line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /acp/orders`.
///
/// The only constructor produces exactly one item, so a request can never be sent with
/// zero items or without a product id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    items: Vec<OrderItem>,
}

impl OrderRequest {
    pub fn single(product_id: ProductId) -> Self {
        Self {
            items: vec![OrderItem {
                product_id,
                quantity: SINGLE_ITEM_QUANTITY,
            }],
        }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

/// Body returned by `POST /acp/orders`.
///
/// Both levels are optional so a body without `order.id` decodes and can be reported as
/// a missing identifier instead of a generic decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub order: Option<OrderEnvelope>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    #[serde(default)]
    pub id: Option<OrderId>,
}

impl OrderResponse {
    pub fn order_id(self) -> Option<OrderId> {
        self.order.and_then(|order| order.id)
    }
}

/// Client-generated token identifying one submission attempt.
///
/// Sent as the `Idempotency-Key` header. Every attempt gets a fresh value; nothing is shared
/// between two submissions, even for the same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The user-visible outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub submission_id: SubmissionId,
    pub product_id: ProductId,
    pub order_id: OrderId,
}

impl OrderConfirmation {
    /// Notification text for the presentation layer. Contains the order id unmodified.
    pub fn message(&self) -> String {
        format!("Order placed! Order ID: {}", self.order_id)
    }
}

impl Display for OrderConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
