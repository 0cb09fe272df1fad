//! # ActorService Trait
//!
//! The `ActorService` trait is the contract a piece of state must satisfy to be driven by the
//! generic [`ServiceActor`](crate::framework::ServiceActor). It names the request enum the
//! service understands and the context (dependencies) injected when the actor starts.
//!
//! # Architecture Note
//! The run loop, channel handling and shutdown logic are written once in the framework.
//! A service only describes *what* happens for each request. The `Request` associated type
//! keeps this type-safe: a catalog request can never reach the order service.
//!
//! # Provided Methods (Hooks)
//! - [`ActorService::on_start`]
//! - [`ActorService::on_stop`]
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::mpsc;

/// Trait implemented by every state machine that runs inside a `ServiceActor`.
///
/// # Async & Context
/// Handlers are async so they can await other actors or the network. The `Context` is
/// injected into `run()` rather than `new()` ("late binding"), so actors can be created
/// first and wired together afterwards.
#[async_trait]
pub trait ActorService: Send + 'static {
    /// The request enum this service processes.
    type Request: Send + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Short name used as the `service` field in log events.
    fn name() -> &'static str;

    /// Called once before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) {}

    /// Handle a single request.
    ///
    /// Requests are processed strictly one at a time. Long-running work that must not
    /// block the mailbox should be spawned, reporting back through `mailbox`.
    async fn handle(
        &mut self,
        request: Self::Request,
        ctx: &Self::Context,
        mailbox: &Mailbox<Self::Request>,
    );

    /// Called once after the mailbox has closed.
    async fn on_stop(&mut self) {}
}

/// A non-owning handle to an actor's own mailbox.
///
/// Spawned tasks use it to post follow-up requests back to the actor that spawned them.
/// It holds a weak sender, so it never keeps an actor alive once every client is dropped.
#[derive(Debug)]
pub struct Mailbox<R> {
    sender: mpsc::WeakSender<R>,
}

impl<R> Clone for Mailbox<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Send + 'static> Mailbox<R> {
    pub(crate) fn new(sender: mpsc::WeakSender<R>) -> Self {
        Self { sender }
    }

    /// Post a request back to the actor.
    ///
    /// Returns `false` when the actor has already shut down; the request is dropped.
    pub async fn post(&self, request: R) -> bool {
        match self.sender.upgrade() {
            Some(sender) => sender.send(request).await.is_ok(),
            None => false,
        }
    }
}
