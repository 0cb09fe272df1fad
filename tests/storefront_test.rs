//! Full-system tests: real actors wired by `Storefront`, commerce service mocked.

use std::sync::Arc;
use storefront_client::api::mock::{Gate, MockCommerceApi};
use storefront_client::catalog_actor::CatalogError;
use storefront_client::config::{PurchasePolicy, StorefrontConfig};
use storefront_client::events::StorefrontEvent;
use storefront_client::lifecycle::Storefront;
use storefront_client::model::{OrderId, Product, ProductId};
use storefront_client::order_actor::OrderError;

fn products() -> Vec<Product> {
    vec![
        Product::new("tee-001", "Tee", 25.0, "Apparel"),
        Product::new("hoodie-001", "Hoodie", 55.0, "Apparel"),
    ]
}

#[tokio::test]
async fn test_browse_and_buy_emits_events_in_order() {
    let mock = Arc::new(MockCommerceApi::new());
    mock.expect_catalog().return_ok(products());
    mock.expect_order().return_ok(OrderId::from("ORD-7"));

    let storefront = Storefront::with_api(&StorefrontConfig::default(), mock.clone());
    let mut events = storefront.subscribe();

    let catalog = storefront.initialize().await.unwrap();
    let hoodie = catalog.products()[1].id.clone();
    let confirmation = storefront.submit(hoodie.clone()).await.unwrap();

    assert_eq!(confirmation.product_id, hoodie);
    assert_eq!(mock.recorded_orders()[0].body["items"][0]["product_id"], "hoodie-001");
    assert_eq!(mock.recorded_orders()[0].submission_id, confirmation.submission_id);

    assert_eq!(events.recv().await.unwrap(), StorefrontEvent::CatalogLoading);
    assert_eq!(
        events.recv().await.unwrap(),
        StorefrontEvent::CatalogLoaded { count: 2 }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        StorefrontEvent::OrderPending {
            submission_id: confirmation.submission_id,
            product_id: hoodie,
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        StorefrontEvent::OrderConfirmed(confirmation)
    );

    storefront.shutdown().await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_overlapping_submission_for_same_product_is_rejected() {
    let mock = Arc::new(MockCommerceApi::new());
    let gate = Gate::new();
    mock.expect_order()
        .held_by(&gate)
        .return_ok(OrderId::from("ORD-1"));
    mock.expect_order().return_ok(OrderId::from("ORD-2"));

    let storefront = Storefront::with_api(&StorefrontConfig::default(), mock.clone());
    let tee = ProductId::from("tee-001");

    let pending = {
        let client = storefront.order_client.clone();
        let tee = tee.clone();
        tokio::spawn(async move { client.submit(tee).await })
    };
    while mock.recorded_orders().is_empty() {
        tokio::task::yield_now().await;
    }
    assert_eq!(storefront.order_client.in_flight().await.unwrap(), [tee.clone()]);

    assert_eq!(
        storefront.submit(tee.clone()).await,
        Err(OrderError::AlreadyInFlight(tee.clone()))
    );
    // A different product is not held up.
    let hoodie = storefront
        .submit(ProductId::from("hoodie-001"))
        .await
        .unwrap();
    assert_eq!(hoodie.order_id, OrderId::from("ORD-2"));

    gate.open();
    assert_eq!(pending.await.unwrap().unwrap().order_id, OrderId::from("ORD-1"));
    assert!(storefront.order_client.in_flight().await.unwrap().is_empty());

    storefront.shutdown().await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_require_loaded_catalog_after_failed_load() {
    let mock = Arc::new(MockCommerceApi::new());
    mock.expect_catalog()
        .return_err(CatalogError::Status { status: 503 });

    let config =
        StorefrontConfig::default().with_purchase_policy(PurchasePolicy::RequireLoadedCatalog);
    let storefront = Storefront::with_api(&config, mock.clone());

    storefront.initialize().await.unwrap_err();
    let err = storefront.submit(ProductId::from(1)).await.unwrap_err();

    assert!(matches!(err, OrderError::CatalogUnavailable(_)));
    assert!(mock.recorded_orders().is_empty());
    storefront.shutdown().await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_server_validates_sends_even_after_failed_load() {
    let mock = Arc::new(MockCommerceApi::new());
    mock.expect_catalog()
        .return_err(CatalogError::Transport("connection refused".to_string()));
    mock.expect_order()
        .return_err(OrderError::Status { status: 404 });

    let storefront = Storefront::with_api(&StorefrontConfig::default(), mock.clone());

    storefront.initialize().await.unwrap_err();
    let err = storefront.submit(ProductId::from(99)).await.unwrap_err();

    assert_eq!(err, OrderError::Status { status: 404 });
    assert_eq!(mock.recorded_orders().len(), 1);
    storefront.shutdown().await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_require_loaded_catalog_rejects_unknown_product() {
    let mock = Arc::new(MockCommerceApi::new());
    mock.expect_catalog().return_ok(products());

    let config =
        StorefrontConfig::default().with_purchase_policy(PurchasePolicy::RequireLoadedCatalog);
    let storefront = Storefront::with_api(&config, mock.clone());
    let mut events = storefront.subscribe();

    storefront.initialize().await.unwrap();
    let mug = ProductId::from("mug-001");
    let err = storefront.submit(mug.clone()).await.unwrap_err();

    assert_eq!(err, OrderError::UnknownProduct(mug.clone()));
    events.recv().await.unwrap();
    events.recv().await.unwrap();
    assert_eq!(
        events.recv().await.unwrap(),
        StorefrontEvent::OrderFailed {
            submission_id: None,
            product_id: mug,
            error: err,
        }
    );
    storefront.shutdown().await.unwrap();
    mock.verify();
}
