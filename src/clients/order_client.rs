//! # Order Client
//!
//! Provides a high‑level API for interacting with the Order actor.
//! It wraps a `ServiceClient<OrderCommand>`; admission checks and the network call happen
//! in the actor.
use crate::framework::{ActorClient, FrameworkError, ServiceClient};
use crate::model::{OrderConfirmation, ProductId};
use crate::order_actor::{OrderCommand, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ServiceClient<OrderCommand>,
}

impl OrderClient {
    pub fn new(inner: ServiceClient<OrderCommand>) -> Self {
        Self { inner }
    }

    /// Places a single-item order (quantity 1) for `product_id`.
    ///
    /// Resolves once the service has answered. The product id is expected to come from the
    /// loaded catalog; whether that is checked client-side depends on the configured
    /// purchase policy.
    #[instrument(skip(self))]
    pub async fn submit(&self, product_id: ProductId) -> Result<OrderConfirmation, OrderError> {
        debug!("submit called");
        info!("Sending submit to actor");
        self.call(|respond_to| OrderCommand::Submit {
            product_id,
            respond_to,
        })
        .await?
    }

    /// Products with a submission currently pending.
    #[instrument(skip(self))]
    pub async fn in_flight(&self) -> Result<Vec<ProductId>, OrderError> {
        self.call(|respond_to| OrderCommand::InFlight { respond_to })
            .await
    }
}

#[async_trait]
impl ActorClient for OrderClient {
    type Request = OrderCommand;
    type Error = OrderError;

    fn inner(&self) -> &ServiceClient<OrderCommand> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
