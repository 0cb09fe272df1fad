//! [`ActorService`] implementation for the catalog loader.
//!
//! The retrieval runs in its own task so that `Snapshot` and `Status` keep answering
//! (with an empty catalog) while the request is in flight. The task reports back with a
//! [`CatalogRequest::Fetched`] message; all `Initialize` callers waiting at that point are
//! answered together.

use super::{CatalogError, CatalogRequest, CatalogStatus, FetchOutcome, ProductLookup};
use crate::api::CommerceApi;
use crate::events::{EventBus, StorefrontEvent};
use crate::framework::{ActorService, Mailbox, Response};
use crate::model::{Catalog, Product, ProductId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Dependencies injected into the catalog actor.
#[derive(Clone)]
pub struct CatalogContext {
    pub api: Arc<dyn CommerceApi>,
    pub events: EventBus,
}

#[derive(Default)]
pub struct CatalogService {
    status: CatalogStatus,
    catalog: Catalog,
    waiters: Vec<Response<Result<Catalog, CatalogError>>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_load(&mut self, ctx: &CatalogContext, mailbox: &Mailbox<CatalogRequest>) {
        info!("Catalog load started");
        self.status = CatalogStatus::Loading;
        ctx.events.publish(StorefrontEvent::CatalogLoading);

        let api = Arc::clone(&ctx.api);
        let mailbox = mailbox.clone();
        tokio::spawn(async move {
            let outcome = FetchOutcome(api.fetch_catalog().await);
            if !mailbox.post(CatalogRequest::Fetched(outcome)).await {
                warn!("Catalog actor stopped before the load completed");
            }
        });
    }

    fn finish_load(&mut self, result: Result<Vec<Product>, CatalogError>, ctx: &CatalogContext) {
        if self.status != CatalogStatus::Loading {
            warn!(status = ?self.status, "Ignoring catalog result outside of a load");
            return;
        }

        let outcome = result.and_then(validate_products).map(Catalog::new);
        match &outcome {
            Ok(catalog) => {
                info!(count = catalog.len(), "Catalog loaded");
                self.catalog = catalog.clone();
                self.status = CatalogStatus::Loaded {
                    count: catalog.len(),
                };
                ctx.events.publish(StorefrontEvent::CatalogLoaded {
                    count: catalog.len(),
                });
            }
            Err(error) => {
                warn!(error = %error, "Catalog load failed");
                self.status = CatalogStatus::Failed(error.clone());
                ctx.events.publish(StorefrontEvent::CatalogFailed {
                    error: error.clone(),
                });
            }
        }

        for waiter in self.waiters.drain(..) {
            let _ = waiter.send(outcome.clone());
        }
    }

    fn lookup(&self, product_id: &ProductId) -> ProductLookup {
        match &self.status {
            CatalogStatus::Loaded { .. } => match self.catalog.get(product_id) {
                Some(product) => ProductLookup::Found(product.clone()),
                None => ProductLookup::NotInCatalog,
            },
            other => ProductLookup::CatalogNotLoaded(other.clone()),
        }
    }
}

#[async_trait]
impl ActorService for CatalogService {
    type Request = CatalogRequest;
    type Context = CatalogContext;

    fn name() -> &'static str {
        "Catalog"
    }

    async fn handle(
        &mut self,
        request: CatalogRequest,
        ctx: &CatalogContext,
        mailbox: &Mailbox<CatalogRequest>,
    ) {
        match request {
            CatalogRequest::Initialize { respond_to } => match &self.status {
                CatalogStatus::NotLoaded => {
                    self.waiters.push(respond_to);
                    self.start_load(ctx, mailbox);
                }
                CatalogStatus::Loading => self.waiters.push(respond_to),
                CatalogStatus::Loaded { .. } => {
                    let _ = respond_to.send(Ok(self.catalog.clone()));
                }
                CatalogStatus::Failed(error) => {
                    let _ = respond_to.send(Err(error.clone()));
                }
            },
            CatalogRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.catalog.clone());
            }
            CatalogRequest::Status { respond_to } => {
                let _ = respond_to.send(self.status.clone());
            }
            CatalogRequest::Lookup {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.lookup(&product_id));
            }
            CatalogRequest::Fetched(FetchOutcome(result)) => self.finish_load(result, ctx),
        }
    }

    async fn on_stop(&mut self) {
        if !self.waiters.is_empty() {
            warn!(
                waiting = self.waiters.len(),
                "Stopping with callers still waiting for the catalog"
            );
        }
    }
}

/// Rejects product records that break the data contract.
fn validate_products(products: Vec<Product>) -> Result<Vec<Product>, CatalogError> {
    if let Some(product) = products
        .iter()
        .find(|p| !p.price.is_finite() || p.price < 0.0)
    {
        return Err(CatalogError::InvalidProduct(format!(
            "product {} has invalid price {}",
            product.id, product.price
        )));
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Gate, MockCommerceApi};
    use crate::framework::{ServiceActor, ServiceClient};

    fn spawn_catalog(mock: Arc<MockCommerceApi>) -> (ServiceClient<CatalogRequest>, EventBus) {
        let events = EventBus::new(16);
        let (actor, client) = ServiceActor::new(CatalogService::new(), 8);
        tokio::spawn(actor.run(CatalogContext {
            api: mock,
            events: events.clone(),
        }));
        (client, events)
    }

    async fn initialize(client: &ServiceClient<CatalogRequest>) -> Result<Catalog, CatalogError> {
        client
            .request(|respond_to| CatalogRequest::Initialize { respond_to })
            .await
            .unwrap()
    }

    async fn status(client: &ServiceClient<CatalogRequest>) -> CatalogStatus {
        client
            .request(|respond_to| CatalogRequest::Status { respond_to })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_load_preserves_server_order() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog().return_ok(vec![
            Product::new("c", "Cap", 3.0, "hat"),
            Product::new("a", "Apron", 1.0, "kitchen"),
            Product::new("b", "Bag", 2.0, "bag"),
        ]);
        let (client, _events) = spawn_catalog(mock.clone());

        let catalog = initialize(&client).await.unwrap();
        let ids: Vec<String> = catalog.iter().map(|p| p.id.to_string()).collect();

        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(status(&client).await, CatalogStatus::Loaded { count: 3 });
        mock.verify();
    }

    #[tokio::test]
    async fn test_second_initialize_does_not_refetch() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog()
            .return_ok(vec![Product::new(1, "Pen", 10.0, "Stationery")]);
        let (client, _events) = spawn_catalog(mock.clone());

        initialize(&client).await.unwrap();
        let again = initialize(&client).await.unwrap();

        assert_eq!(again.len(), 1);
        assert_eq!(mock.catalog_calls(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_reads_during_load_see_empty_catalog() {
        let mock = Arc::new(MockCommerceApi::new());
        let gate = Gate::new();
        mock.expect_catalog()
            .held_by(&gate)
            .return_ok(vec![Product::new(1, "Pen", 10.0, "Stationery")]);
        let (client, _events) = spawn_catalog(mock.clone());

        let first = {
            let client = client.clone();
            tokio::spawn(async move { initialize(&client).await })
        };
        let second = {
            let client = client.clone();
            tokio::spawn(async move { initialize(&client).await })
        };

        while status(&client).await != CatalogStatus::Loading {
            tokio::task::yield_now().await;
        }
        let snapshot = client
            .request(|respond_to| CatalogRequest::Snapshot { respond_to })
            .await
            .unwrap();
        assert!(snapshot.is_empty());

        gate.open();
        assert_eq!(first.await.unwrap().unwrap().len(), 1);
        assert_eq!(second.await.unwrap().unwrap().len(), 1);
        assert_eq!(mock.catalog_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_terminal_and_not_retried() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog()
            .return_err(CatalogError::Status { status: 503 });
        let (client, events) = spawn_catalog(mock.clone());
        let mut events = events.subscribe();

        let err = initialize(&client).await.unwrap_err();
        assert_eq!(err, CatalogError::Status { status: 503 });

        let again = initialize(&client).await.unwrap_err();
        assert_eq!(again, err);
        assert_eq!(mock.catalog_calls(), 1);
        let final_status = status(&client).await;
        assert!(final_status.is_terminal());
        assert_eq!(final_status, CatalogStatus::Failed(err.clone()));

        assert_eq!(events.recv().await.unwrap(), StorefrontEvent::CatalogLoading);
        assert_eq!(
            events.recv().await.unwrap(),
            StorefrontEvent::CatalogFailed { error: err }
        );
    }

    #[tokio::test]
    async fn test_invalid_price_fails_the_load() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog()
            .return_ok(vec![Product::new(1, "Broken", -5.0, "Misc")]);
        let (client, _events) = spawn_catalog(mock);

        let err = initialize(&client).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct(_)));

        let snapshot = client
            .request(|respond_to| CatalogRequest::Snapshot { respond_to })
            .await
            .unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_reports_catalog_state() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog()
            .return_ok(vec![Product::new(1, "Pen", 10.0, "Stationery")]);
        let (client, _events) = spawn_catalog(mock);

        let lookup = |id: i64| {
            let client = client.clone();
            async move {
                client
                    .request(|respond_to| CatalogRequest::Lookup {
                        product_id: ProductId::from(id),
                        respond_to,
                    })
                    .await
                    .unwrap()
            }
        };

        assert_eq!(
            lookup(1).await,
            ProductLookup::CatalogNotLoaded(CatalogStatus::NotLoaded)
        );

        initialize(&client).await.unwrap();

        assert!(matches!(lookup(1).await, ProductLookup::Found(p) if p.name == "Pen"));
        assert_eq!(lookup(2).await, ProductLookup::NotInCatalog);
    }
}
