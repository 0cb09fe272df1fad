//! [`ActorService`] implementation for the order submitter.
//!
//! Each accepted submission is spawned as an independent task, so submissions for different
//! products overlap freely. The actor itself only keeps the in-flight guard map, keyed by
//! product id, and is told by each task when it settles.

use super::{OrderCommand, OrderError, Settlement};
use crate::api::CommerceApi;
use crate::catalog_actor::{CatalogStatus, ProductLookup};
use crate::clients::CatalogClient;
use crate::config::PurchasePolicy;
use crate::events::{EventBus, StorefrontEvent};
use crate::framework::{ActorService, Mailbox, Response};
use crate::model::{OrderConfirmation, OrderRequest, ProductId, SubmissionId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dependencies injected into the order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub api: Arc<dyn CommerceApi>,
    pub catalog: CatalogClient,
    pub events: EventBus,
    pub policy: PurchasePolicy,
    pub in_flight_guard: bool,
}

#[derive(Default)]
pub struct OrderService {
    in_flight: HashMap<ProductId, Vec<SubmissionId>>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(
        &self,
        product_id: ProductId,
        error: OrderError,
        ctx: &OrderContext,
        respond_to: Response<Result<OrderConfirmation, OrderError>>,
    ) {
        warn!(%product_id, error = %error, "Submission rejected");
        ctx.events.publish(StorefrontEvent::OrderFailed {
            submission_id: None,
            product_id,
            error: error.clone(),
        });
        let _ = respond_to.send(Err(error));
    }

    /// Client-side admission checks. `Ok(())` means the request may be sent.
    async fn admit(&self, product_id: &ProductId, ctx: &OrderContext) -> Result<(), OrderError> {
        if ctx.in_flight_guard && self.in_flight.contains_key(product_id) {
            return Err(OrderError::AlreadyInFlight(product_id.clone()));
        }

        if ctx.policy == PurchasePolicy::RequireLoadedCatalog {
            let lookup = ctx
                .catalog
                .lookup(product_id.clone())
                .await
                .map_err(|e| OrderError::CatalogUnavailable(e.to_string()))?;
            match lookup {
                ProductLookup::Found(_) => {}
                ProductLookup::NotInCatalog => {
                    return Err(OrderError::UnknownProduct(product_id.clone()))
                }
                ProductLookup::CatalogNotLoaded(status) => {
                    return Err(OrderError::CatalogUnavailable(describe(&status)))
                }
            }
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        product_id: ProductId,
        ctx: &OrderContext,
        mailbox: &Mailbox<OrderCommand>,
        respond_to: Response<Result<OrderConfirmation, OrderError>>,
    ) {
        let submission_id = SubmissionId::generate();
        self.in_flight
            .entry(product_id.clone())
            .or_default()
            .push(submission_id);
        info!(%product_id, %submission_id, "Submission pending");
        ctx.events.publish(StorefrontEvent::OrderPending {
            submission_id,
            product_id: product_id.clone(),
        });

        let api = Arc::clone(&ctx.api);
        let events = ctx.events.clone();
        let mailbox = mailbox.clone();
        tokio::spawn(async move {
            let request = OrderRequest::single(product_id.clone());
            let result = api
                .create_order(&request, submission_id)
                .await
                .map(|order_id| OrderConfirmation {
                    submission_id,
                    product_id: product_id.clone(),
                    order_id,
                });

            match &result {
                Ok(confirmation) => {
                    info!(%product_id, order_id = %confirmation.order_id, "Order confirmed");
                    events.publish(StorefrontEvent::OrderConfirmed(confirmation.clone()));
                }
                Err(error) => {
                    warn!(%product_id, %submission_id, error = %error, "Order failed");
                    events.publish(StorefrontEvent::OrderFailed {
                        submission_id: Some(submission_id),
                        product_id: product_id.clone(),
                        error: error.clone(),
                    });
                }
            }

            // Release the guard before answering, so a caller reacting to the answer
            // can submit the same product again.
            mailbox
                .post(OrderCommand::Settled(Settlement {
                    product_id,
                    submission_id,
                }))
                .await;
            let _ = respond_to.send(result);
        });
    }

    fn settle(&mut self, product_id: &ProductId, submission_id: SubmissionId) {
        if let Some(pending) = self.in_flight.get_mut(product_id) {
            pending.retain(|id| *id != submission_id);
            if pending.is_empty() {
                self.in_flight.remove(product_id);
            }
        }
        debug!(%product_id, %submission_id, pending = self.in_flight.len(), "Settled");
    }
}

#[async_trait]
impl ActorService for OrderService {
    type Request = OrderCommand;
    type Context = OrderContext;

    fn name() -> &'static str {
        "Order"
    }

    async fn handle(
        &mut self,
        request: OrderCommand,
        ctx: &OrderContext,
        mailbox: &Mailbox<OrderCommand>,
    ) {
        match request {
            OrderCommand::Submit {
                product_id,
                respond_to,
            } => match self.admit(&product_id, ctx).await {
                Ok(()) => self.dispatch(product_id, ctx, mailbox, respond_to),
                Err(error) => self.reject(product_id, error, ctx, respond_to),
            },
            OrderCommand::InFlight { respond_to } => {
                let _ = respond_to.send(self.in_flight.keys().cloned().collect());
            }
            OrderCommand::Settled(Settlement {
                product_id,
                submission_id,
            }) => self.settle(&product_id, submission_id),
        }
    }
}

fn describe(status: &CatalogStatus) -> String {
    match status {
        CatalogStatus::NotLoaded => "catalog not loaded".to_string(),
        CatalogStatus::Loading => "catalog still loading".to_string(),
        CatalogStatus::Loaded { count } => format!("catalog loaded with {count} products"),
        CatalogStatus::Failed(error) => format!("catalog failed to load: {error}"),
    }
}
