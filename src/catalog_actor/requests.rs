//! Requests understood by the Catalog actor.
//!
//! [`CatalogRequest::Fetched`] is posted by the actor's own retrieval task. Its payload can
//! only be built inside this crate, so a client cannot feed the actor a load result:
//!
//! ```compile_fail
//! use storefront_client::catalog_actor::FetchOutcome;
//!
//! let forged = FetchOutcome(Ok(Vec::new()));
//! ```

use super::CatalogError;
use crate::framework::Response;
use crate::model::{Catalog, Product, ProductId};

/// Loading lifecycle of the catalog.
///
/// `NotLoaded → Loading → Loaded | Failed`. Both end states are terminal: a failed load is
/// never retried.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded { count: usize },
    Failed(CatalogError),
}

impl CatalogStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed(_))
    }
}

/// Answer to a [`CatalogRequest::Lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    Found(Product),
    NotInCatalog,
    /// The catalog is not in the `Loaded` state; carries the current status.
    CatalogNotLoaded(CatalogStatus),
}

#[derive(Debug)]
pub enum CatalogRequest {
    /// Trigger the one-and-only catalog retrieval, or wait for / observe its outcome.
    Initialize {
        respond_to: Response<Result<Catalog, CatalogError>>,
    },
    /// Current products; empty until a load succeeds.
    Snapshot { respond_to: Response<Catalog> },
    Status { respond_to: Response<CatalogStatus> },
    Lookup {
        product_id: ProductId,
        respond_to: Response<ProductLookup>,
    },
    /// Internal: outcome of the retrieval task.
    #[doc(hidden)]
    Fetched(FetchOutcome),
}

/// Result of the retrieval task, sealed to the catalog actor.
#[derive(Debug)]
pub struct FetchOutcome(pub(crate) Result<Vec<Product>, CatalogError>);
