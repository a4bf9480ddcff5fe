//! # Vending API
//!
//! The boundary between the session and whatever serves the menu and takes
//! orders. [`LocalVendingApi`] serves it from the in-process actors.

use super::{BeverageClient, CondimentClient, OrderClient};
use crate::catalog_actor::CatalogError;
use crate::model::{CatalogSnapshot, Order, OrderCreate, Recommendation};
use crate::order_actor::OrderError;
use crate::recommendation;
use actor_framework::ActorClient;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend could not be reached or failed internally. Worth retrying.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the request as given.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Unavailable(e.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidBeverage(_)
            | OrderError::InvalidCondiment(_)
            | OrderError::InvalidTransition { .. }
            | OrderError::NotFound(_) => ApiError::Rejected(e.to_string()),
            OrderError::CatalogUnavailable(_) | OrderError::ActorCommunicationError(_) => {
                ApiError::Unavailable(e.to_string())
            }
        }
    }
}

/// Collaborators the session depends on.
#[async_trait]
pub trait VendingApi: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ApiError>;

    async fn submit_order(&self, payload: &OrderCreate) -> Result<Order, ApiError>;

    /// Recent orders, oldest first.
    async fn fetch_order_history(&self) -> Result<Vec<Order>, ApiError>;

    async fn fetch_recommendation(&self) -> Result<Recommendation, ApiError>;
}

/// [`VendingApi`] backed by the catalog and order actors of a
/// [`VendingSystem`](crate::lifecycle::VendingSystem).
#[derive(Clone)]
pub struct LocalVendingApi {
    beverages: BeverageClient,
    condiments: CondimentClient,
    orders: OrderClient,
    history_view: usize,
}

impl LocalVendingApi {
    pub fn new(
        beverages: BeverageClient,
        condiments: CondimentClient,
        orders: OrderClient,
        history_view: usize,
    ) -> Self {
        Self {
            beverages,
            condiments,
            orders,
            history_view,
        }
    }
}

#[async_trait]
impl VendingApi for LocalVendingApi {
    #[instrument(skip(self))]
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ApiError> {
        let beverages = self.beverages.list().await?;
        let condiments = self.condiments.list().await?;
        debug!(
            beverages = beverages.len(),
            condiments = condiments.len(),
            "Catalog fetched"
        );
        Ok(CatalogSnapshot::new(beverages, condiments))
    }

    #[instrument(skip(self, payload))]
    async fn submit_order(&self, payload: &OrderCreate) -> Result<Order, ApiError> {
        Ok(self.orders.place_order(payload.clone()).await?)
    }

    async fn fetch_order_history(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.orders.recent(self.history_view).await?)
    }

    #[instrument(skip(self))]
    async fn fetch_recommendation(&self) -> Result<Recommendation, ApiError> {
        let history = self.orders.list().await?;
        Ok(recommendation::recommend(&history, &mut rand::thread_rng()))
    }
}
