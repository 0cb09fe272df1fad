//! # Storefront Demo
//!
//! Runs the catalog-to-order flow once against the default commerce service
//! (`http://localhost:8000`):
//! 1.  Start the [`Storefront`].
//! 2.  Load the catalog and list it.
//! 3.  Buy the first product and print the confirmation.

use storefront_client::config::StorefrontConfig;
use storefront_client::events::{next_event, StorefrontEvent};
use storefront_client::lifecycle::{setup_tracing, Storefront};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront demo");

    let storefront = Storefront::new(StorefrontConfig::default()).map_err(|e| e.to_string())?;

    let mut events = storefront.subscribe();
    let listener = tokio::spawn(async move {
        while let Some(event) = next_event(&mut events).await {
            match event {
                StorefrontEvent::OrderConfirmed(confirmation) => {
                    info!("{}", confirmation.message())
                }
                StorefrontEvent::OrderFailed { error, .. } => warn!(%error, "Order failed"),
                other => info!(event = ?other, "Storefront event"),
            }
        }
    });

    let span = tracing::info_span!("catalog_loading");
    let catalog = async {
        info!("Loading catalog");
        storefront.initialize().await
    }
    .instrument(span)
    .await;

    match catalog {
        Ok(catalog) => {
            for product in catalog.iter() {
                info!(
                    id = %product.id,
                    name = %product.name,
                    price = product.price,
                    category = %product.category,
                    "Product"
                );
            }

            if let Some(product) = catalog.products().first() {
                let span = tracing::info_span!("order_processing");
                let result = async {
                    info!(product = %product.name, "Buying");
                    storefront.submit(product.id.clone()).await
                }
                .instrument(span)
                .await;

                match result {
                    Ok(confirmation) => println!("{}", confirmation.message()),
                    Err(e) => error!(error = %e, "Order processing failed"),
                }
            } else {
                warn!("Catalog is empty, nothing to buy");
            }
        }
        Err(e) => error!(error = %e, "Catalog could not be loaded"),
    }

    storefront.shutdown().await.map_err(|e| e.to_string())?;
    // The bus closes once the last submission task has published.
    if let Err(e) = listener.await {
        error!(error = %e, "Event listener failed");
    }

    info!("Demo completed");
    Ok(())
}
