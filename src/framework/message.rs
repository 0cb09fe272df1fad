//! # Generic Messages
//!
//! Every request enum handled by a [`ServiceActor`](crate::framework::ServiceActor)
//! carries its own reply channel. This module defines that channel type.

use tokio::sync::oneshot;

/// One-shot reply channel embedded in request variants.
///
/// The payload is the domain result itself (usually a `Result<T, DomainError>`);
/// transport failures of the mailbox are reported separately as
/// [`FrameworkError`](crate::framework::FrameworkError) by the client.
pub type Response<T> = oneshot::Sender<T>;
