//! # Engine Errors
//!
//! The transport-level failures every actor and client can hit. Entity
//! code reports its own error type; the actor boxes it into
//! [`FrameworkError::EntityError`] so callers see one error surface per
//! channel round-trip.

/// Errors raised by the actor engine itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed; it is no longer running.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity stored under the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// An entity hook or action reported a domain failure.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
