//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of any domain.
//! Domain clients map these into their own error enums.

/// Errors that can occur while talking to an actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
