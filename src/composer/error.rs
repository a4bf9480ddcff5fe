//! Error types for order composition and submission.

use crate::model::ItemKind;
use thiserror::Error;

/// Recoverable conditions raised while composing or submitting an order.
///
/// None of them is fatal: the selection is left in a state the user can correct.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposerError {
    /// No beverage is selected, so there is nothing to price or submit.
    #[error("Incomplete selection: choose a beverage first")]
    IncompleteSelection,

    /// A submission is already waiting for the backend.
    #[error("An order is already being submitted")]
    SubmissionInProgress,

    /// A backend answer arrived while no submission was waiting for one.
    #[error("No order is being submitted")]
    NoSubmissionInFlight,

    /// The selection references an id the catalog does not contain.
    #[error("Catalog lookup miss: no {kind:?} with id {id}")]
    CatalogLookupMiss { kind: ItemKind, id: String },

    /// The backend refused or failed the order; the selection is kept for a retry.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),
}

impl From<String> for ComposerError {
    fn from(msg: String) -> Self {
        ComposerError::SubmissionFailed(msg)
    }
}
