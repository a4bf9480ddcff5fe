//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, independent of any entity.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`] so
//! that resource clients can map them onto their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A create request resolved to an id that is already stored.
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
