//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient),
//! plus the [`VendingApi`] boundary the session talks to.

pub mod beverage_client;
pub mod condiment_client;
pub mod order_client;
pub mod vending_api;

pub use beverage_client::*;
pub use condiment_client::*;
pub use order_client::*;
pub use vending_api::*;

use crate::catalog_actor::CatalogError;
use actor_framework::FrameworkError;

/// Recovers the entity's own error from a framework error where there is one.
pub(crate) fn catalog_error(e: FrameworkError) -> CatalogError {
    match e {
        FrameworkError::NotFound(id) => CatalogError::NotFound(id),
        FrameworkError::AlreadyExists(id) => CatalogError::AlreadyExists(id),
        FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
            Ok(err) => *err,
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        },
        other => CatalogError::ActorCommunicationError(other.to_string()),
    }
}
