//! Notifications for the presentation layer.
//!
//! The core never touches the UI. It publishes [`StorefrontEvent`]s on a broadcast channel
//! and whoever renders the storefront subscribes. Publishing never blocks and never fails:
//! with no subscribers the event is simply dropped.

use crate::catalog_actor::CatalogError;
use crate::model::{OrderConfirmation, ProductId, SubmissionId};
use crate::order_actor::OrderError;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontEvent {
    CatalogLoading,
    CatalogLoaded {
        count: usize,
    },
    CatalogFailed {
        error: CatalogError,
    },
    OrderPending {
        submission_id: SubmissionId,
        product_id: ProductId,
    },
    OrderConfirmed(OrderConfirmation),
    OrderFailed {
        submission_id: Option<SubmissionId>,
        product_id: ProductId,
        error: OrderError,
    },
}

/// Cloneable publisher side of the event channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StorefrontEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorefrontEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: StorefrontEvent) {
        trace!(?event, "publish");
        let _ = self.sender.send(event);
    }
}

/// Waits for the next event a subscriber can still see.
///
/// A subscriber that fell behind skips what it missed and carries on. Returns `None` once
/// every publisher is gone.
pub async fn next_event(
    receiver: &mut broadcast::Receiver<StorefrontEvent>,
) -> Option<StorefrontEvent> {
    loop {
        match receiver.recv().await {
            Ok(event) => return Some(event),
            Err(RecvError::Lagged(missed)) => warn!(missed, "Event subscriber lagged"),
            Err(RecvError::Closed) => return None,
        }
    }
}
