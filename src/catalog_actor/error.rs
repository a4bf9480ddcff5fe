//! Error types for the catalog actors.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested entry was not found.
    #[error("Catalog entry not found: {0}")]
    NotFound(String),

    /// An entry with this id is already on the menu.
    #[error("Catalog entry already exists: {0}")]
    AlreadyExists(String),

    /// Prices cannot be negative.
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: String },

    /// Quotes need at least one unit.
    #[error("Invalid quantity for {0}: must be at least 1")]
    InvalidQuantity(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
