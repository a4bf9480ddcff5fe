use super::catalog_error;
use crate::catalog_actor::{CatalogAction, CatalogError, CatalogQuote};
use crate::model::{Condiment, CondimentCreate, CondimentId, CondimentUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the condiment catalog actor.
#[derive(Clone)]
pub struct CondimentClient {
    inner: ResourceClient<Condiment>,
}

impl CondimentClient {
    pub fn new(inner: ResourceClient<Condiment>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn add_condiment(&self, params: CondimentCreate) -> Result<CondimentId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_condiment(
        &self,
        id: CondimentId,
        update: CondimentUpdate,
    ) -> Result<Condiment, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn quote(
        &self,
        id: CondimentId,
        quantity: u32,
    ) -> Result<CatalogQuote, CatalogError> {
        debug!("Requesting quote");
        self.inner
            .perform_action(id, CatalogAction::Quote(quantity))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Condiment> for CondimentClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Condiment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        catalog_error(e)
    }
}
