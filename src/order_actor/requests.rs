//! Requests understood by the Order actor.
//!
//! [`OrderCommand::Settled`] is posted by the actor's own submission tasks. Its payload can
//! only be built inside this crate, so a client cannot release the in-flight guard:
//!
//! ```compile_fail
//! use storefront_client::model::{ProductId, SubmissionId};
//! use storefront_client::order_actor::Settlement;
//!
//! let forged = Settlement {
//!     product_id: ProductId::from(1),
//!     submission_id: SubmissionId::generate(),
//! };
//! ```

use super::OrderError;
use crate::framework::Response;
use crate::model::{OrderConfirmation, ProductId, SubmissionId};

#[derive(Debug)]
pub enum OrderCommand {
    /// Place a single-item order (quantity 1) for `product_id`.
    Submit {
        product_id: ProductId,
        respond_to: Response<Result<OrderConfirmation, OrderError>>,
    },
    /// Products that currently have a submission pending.
    InFlight { respond_to: Response<Vec<ProductId>> },
    /// Internal: a submission task reached a terminal state.
    #[doc(hidden)]
    Settled(Settlement),
}

/// Identifies a finished submission, sealed to the order actor.
#[derive(Debug)]
pub struct Settlement {
    pub(crate) product_id: ProductId,
    pub(crate) submission_id: SubmissionId,
}
