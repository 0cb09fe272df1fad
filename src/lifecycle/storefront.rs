use crate::api::{CommerceApi, HttpCommerceApi};
use crate::catalog_actor::{CatalogContext, CatalogError};
use crate::clients::{CatalogClient, OrderClient};
use crate::config::{ConfigError, StorefrontConfig};
use crate::events::{EventBus, StorefrontEvent};
use crate::model::{Catalog, OrderConfirmation, ProductId};
use crate::order_actor::{OrderContext, OrderError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("actor task failed: {0}")]
    ActorTask(String),
}

/// Runtime orchestrator for the storefront client.
///
/// `Storefront` starts the Catalog and Order actors, wires the order actor to the catalog
/// client and the shared [`EventBus`], and shuts both down again.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(StorefrontConfig::default())?;
///
/// let catalog = storefront.initialize().await?;
/// let confirmation = storefront.submit(catalog.products()[0].id.clone()).await?;
/// println!("{}", confirmation.message());
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    events: EventBus,
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Validates `config` and starts the actors against the HTTP commerce service.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let api = HttpCommerceApi::new(&config)?;
        info!(base_url = %config.base_url, "Using commerce service");
        Ok(Self::with_api(&config, Arc::new(api)))
    }

    /// Starts the actors against any [`CommerceApi`]. Must be called inside a tokio runtime.
    pub fn with_api(config: &StorefrontConfig, api: Arc<dyn CommerceApi>) -> Self {
        let events = EventBus::new(config.event_capacity);

        // 1. Create actors
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(config.mailbox_capacity);
        let (order_actor, order_client) = crate::order_actor::new(config.mailbox_capacity);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(CatalogContext {
            api: Arc::clone(&api),
            events: events.clone(),
        }));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            api,
            catalog: catalog_client.clone(),
            events: events.clone(),
            policy: config.purchase_policy,
            in_flight_guard: config.in_flight_guard,
        }));

        Self {
            catalog_client,
            order_client,
            events,
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Loads the catalog. Intended to be called once by the owning context.
    pub async fn initialize(&self) -> Result<Catalog, CatalogError> {
        self.catalog_client.initialize().await
    }

    pub async fn catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog_client.snapshot().await
    }

    pub async fn submit(&self, product_id: ProductId) -> Result<OrderConfirmation, OrderError> {
        self.order_client.submit(product_id).await
    }

    /// Receives every catalog and order transition published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StorefrontEvent> {
        self.events.subscribe()
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the mailboxes; each actor drains what is queued and
    /// exits. The order actor holds a catalog client of its own, so the catalog actor stops
    /// after the order actor. Submissions already dispatched finish on their own tasks.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        drop(self.order_client);
        drop(self.catalog_client);

        // Order first: its context keeps the catalog mailbox open.
        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StorefrontError::ActorTask(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockCommerceApi;
    use crate::events::next_event;
    use crate::model::{OrderId, Product};

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        let config = StorefrontConfig::default().with_base_url("");
        assert!(matches!(
            Storefront::new(config),
            Err(StorefrontError::Config(ConfigError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_initialize_then_submit_then_shutdown() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_catalog()
            .return_ok(vec![Product::new(1, "Pen", 10.0, "Stationery")]);
        mock.expect_order().return_ok(OrderId::from("ORD-99"));

        let storefront = Storefront::with_api(&StorefrontConfig::default(), mock.clone());
        let mut events = storefront.subscribe();

        let catalog = storefront.initialize().await.unwrap();
        let confirmation = storefront
            .submit(catalog.products()[0].id.clone())
            .await
            .unwrap();

        assert_eq!(confirmation.message(), "Order placed! Order ID: ORD-99");
        assert_eq!(storefront.catalog().await.unwrap(), catalog);
        assert_eq!(events.recv().await.unwrap(), StorefrontEvent::CatalogLoading);
        assert_eq!(
            events.recv().await.unwrap(),
            StorefrontEvent::CatalogLoaded { count: 1 }
        );

        storefront.shutdown().await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_event_stream_ends_after_shutdown() {
        let mock = Arc::new(MockCommerceApi::new());
        mock.expect_order().return_ok(OrderId::from("ORD-1"));

        let storefront = Storefront::with_api(&StorefrontConfig::default(), mock);
        let mut events = storefront.subscribe();
        storefront.submit(ProductId::from(1)).await.unwrap();
        storefront.shutdown().await.unwrap();

        let mut seen = Vec::new();
        while let Some(event) = next_event(&mut events).await {
            seen.push(event);
        }
        assert!(matches!(seen.as_slice(), [
            StorefrontEvent::OrderPending { .. },
            StorefrontEvent::OrderConfirmed(_)
        ]));
    }

    #[tokio::test]
    async fn test_shutdown_without_use() {
        let mock = Arc::new(MockCommerceApi::new());
        let storefront = Storefront::with_api(&StorefrontConfig::default(), mock.clone());
        storefront.shutdown().await.unwrap();
        assert_eq!(mock.catalog_calls(), 0);
    }
}
