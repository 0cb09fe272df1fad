//! # Mock Commerce Service
//!
//! `MockCommerceApi` implements [`CommerceApi`] entirely in memory. Tests queue the responses
//! the "service" should give, run the real actors against it, then inspect what was sent.
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_client::api::mock::MockCommerceApi;
//! use storefront_client::api::CommerceApi;
//! use storefront_client::model::{OrderId, OrderRequest, ProductId, SubmissionId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = Arc::new(MockCommerceApi::new());
//!     mock.expect_order().return_ok(OrderId::from("ORD-1"));
//!
//!     let request = OrderRequest::single(ProductId::from(1));
//!     let id = mock.create_order(&request, SubmissionId::generate()).await.unwrap();
//!
//!     assert_eq!(id, OrderId::from("ORD-1"));
//!     assert_eq!(mock.recorded_orders()[0].body["items"][0]["quantity"], 1);
//!     mock.verify();
//! }
//! ```
//!
//! ## Holding a response
//!
//! A response can be held back until the test releases it with [`Gate::open`]. This keeps a
//! catalog load or a submission pending, which is how the "still loading" and
//! "already in flight" paths are exercised.

use crate::api::CommerceApi;
use crate::catalog_actor::CatalogError;
use crate::model::{OrderId, OrderRequest, Product, SubmissionId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Releases a held response.
#[derive(Clone, Debug, Default)]
pub struct Gate(Arc<Notify>);

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.0.notify_one();
    }

    async fn wait(&self) {
        self.0.notified().await;
    }
}

struct Expectation<T> {
    response: T,
    gate: Option<Gate>,
}

/// An order request as the mock received it.
#[derive(Clone, Debug)]
pub struct RecordedOrder {
    /// The JSON body that would have been sent.
    pub body: serde_json::Value,
    pub submission_id: SubmissionId,
}

#[derive(Default)]
pub struct MockCommerceApi {
    catalog: Mutex<VecDeque<Expectation<Result<Vec<Product>, CatalogError>>>>,
    orders: Mutex<VecDeque<Expectation<Result<OrderId, OrderError>>>>,
    recorded: Mutex<Vec<RecordedOrder>>,
    catalog_calls: AtomicUsize,
    unexpected: AtomicUsize,
}

impl MockCommerceApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `fetch_catalog` call.
    pub fn expect_catalog(&self) -> CatalogExpectationBuilder<'_> {
        CatalogExpectationBuilder {
            mock: self,
            gate: None,
        }
    }

    /// Expects one `create_order` call.
    pub fn expect_order(&self) -> OrderExpectationBuilder<'_> {
        OrderExpectationBuilder {
            mock: self,
            gate: None,
        }
    }

    /// Number of `fetch_catalog` calls received so far.
    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    /// Every order request received so far, in arrival order.
    pub fn recorded_orders(&self) -> Vec<RecordedOrder> {
        self.recorded.lock().unwrap().clone()
    }

    /// Panics if an expectation was not consumed or an unexpected call arrived.
    pub fn verify(&self) {
        let unexpected = self.unexpected.load(Ordering::SeqCst);
        if unexpected > 0 {
            panic!("{unexpected} unexpected call(s) reached the mock");
        }
        let catalog = self.catalog.lock().unwrap().len();
        let orders = self.orders.lock().unwrap().len();
        if catalog + orders > 0 {
            panic!(
                "Not all expectations were met. {catalog} catalog and {orders} order remaining"
            );
        }
    }
}

#[async_trait]
impl CommerceApi for MockCommerceApi {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        let expectation = self.catalog.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation { response, gate }) => {
                if let Some(gate) = gate {
                    gate.wait().await;
                }
                response
            }
            None => {
                self.unexpected.fetch_add(1, Ordering::SeqCst);
                Err(CatalogError::Transport("unexpected catalog request".to_string()))
            }
        }
    }

    async fn create_order(
        &self,
        request: &OrderRequest,
        submission_id: SubmissionId,
    ) -> Result<OrderId, OrderError> {
        let body = serde_json::to_value(request).map_err(|e| OrderError::Decode(e.to_string()))?;
        self.recorded.lock().unwrap().push(RecordedOrder {
            body,
            submission_id,
        });

        let expectation = self.orders.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation { response, gate }) => {
                if let Some(gate) = gate {
                    gate.wait().await;
                }
                response
            }
            None => {
                self.unexpected.fetch_add(1, Ordering::SeqCst);
                Err(OrderError::Transport("unexpected order request".to_string()))
            }
        }
    }
}

/// Builder for `fetch_catalog` expectations.
pub struct CatalogExpectationBuilder<'a> {
    mock: &'a MockCommerceApi,
    gate: Option<Gate>,
}

impl CatalogExpectationBuilder<'_> {
    /// Hold the response until `gate` is opened.
    pub fn held_by(mut self, gate: &Gate) -> Self {
        self.gate = Some(gate.clone());
        self
    }

    pub fn return_ok(self, products: Vec<Product>) {
        self.push(Ok(products));
    }

    pub fn return_err(self, error: CatalogError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<Product>, CatalogError>) {
        self.mock.catalog.lock().unwrap().push_back(Expectation {
            response,
            gate: self.gate,
        });
    }
}

/// Builder for `create_order` expectations.
pub struct OrderExpectationBuilder<'a> {
    mock: &'a MockCommerceApi,
    gate: Option<Gate>,
}

impl OrderExpectationBuilder<'_> {
    /// Hold the response until `gate` is opened.
    pub fn held_by(mut self, gate: &Gate) -> Self {
        self.gate = Some(gate.clone());
        self
    }

    pub fn return_ok(self, order_id: OrderId) {
        self.push(Ok(order_id));
    }

    pub fn return_err(self, error: OrderError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<OrderId, OrderError>) {
        self.mock.orders.lock().unwrap().push_back(Expectation {
            response,
            gate: self.gate,
        });
    }
}
