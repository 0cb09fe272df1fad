//! # Generic Actor Server
//!
//! This module defines the `ServiceActor`, the component that owns a service's state and
//! processes its requests sequentially. It is the "Server" half of the actor model.

use crate::framework::client::ServiceClient;
use crate::framework::service::{ActorService, Mailbox};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that drives an [`ActorService`].
///
/// # Architecture Note
/// The actor owns the service state and the receiving end of the channel. Because requests
/// are processed one at a time inside a single task, the service never needs a `Mutex` or
/// `RwLock` for its own state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ServiceActor::new(service, buffer)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// The loop ends when every [`ServiceClient`] has been dropped.
pub struct ServiceActor<S: ActorService> {
    receiver: mpsc::Receiver<S::Request>,
    mailbox: Mailbox<S::Request>,
    service: S,
}

impl<S: ActorService> ServiceActor<S> {
    /// Creates a new `ServiceActor` and its associated `ServiceClient`.
    ///
    /// # Arguments
    ///
    /// * `service` - The initial service state.
    /// * `buffer_size` - The capacity of the MPSC channel. When the channel is full,
    ///   callers wait until there is space.
    pub fn new(service: S, buffer_size: usize) -> (Self, ServiceClient<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            mailbox: Mailbox::new(sender.downgrade()),
            service,
        };
        (actor, ServiceClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every handler, allowing the service to reach
    /// dependencies that were created after the actor itself.
    pub async fn run(mut self, context: S::Context) {
        let service = S::name();
        info!(service, "Actor started");
        self.service.on_start(&context).await;

        let mut processed: u64 = 0;
        while let Some(request) = self.receiver.recv().await {
            debug!(service, ?request, "Request");
            self.service.handle(request, &context, &self.mailbox).await;
            processed += 1;
        }

        self.service.on_stop().await;
        info!(service, processed, "Shutdown");
    }
}
