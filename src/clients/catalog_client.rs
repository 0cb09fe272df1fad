//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the Catalog actor.
//! It wraps a `ServiceClient<CatalogRequest>` and exposes domain‑specific methods.
use crate::catalog_actor::{CatalogError, CatalogRequest, CatalogStatus, ProductLookup};
use crate::framework::{ActorClient, FrameworkError, ServiceClient};
use crate::model::{Catalog, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ServiceClient<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(inner: ServiceClient<CatalogRequest>) -> Self {
        Self { inner }
    }

    /// Runs the one-time catalog retrieval and returns its outcome.
    ///
    /// Safe to call more than once: later calls wait for, or replay, the first outcome
    /// without contacting the service again.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.call(|respond_to| CatalogRequest::Initialize { respond_to })
            .await?
    }

    /// Products currently held. Empty before a successful load.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Catalog, CatalogError> {
        self.call(|respond_to| CatalogRequest::Snapshot { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<CatalogStatus, CatalogError> {
        self.call(|respond_to| CatalogRequest::Status { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, product_id: ProductId) -> Result<ProductLookup, CatalogError> {
        self.call(|respond_to| CatalogRequest::Lookup {
            product_id,
            respond_to,
        })
        .await
    }
}

#[async_trait]
impl ActorClient for CatalogClient {
    type Request = CatalogRequest;
    type Error = CatalogError;

    fn inner(&self) -> &ServiceClient<CatalogRequest> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}
