use crate::catalog_actor::{self, CatalogError};
use crate::clients::{BeverageClient, CondimentClient, LocalVendingApi, OrderClient};
use crate::config::VendingConfig;
use crate::order_actor;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    /// The configured menu could not be loaded into the catalogs.
    #[error("Failed to seed catalog: {0}")]
    Seed(#[from] CatalogError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The running backend: catalog actors, the order actor, and their clients.
///
/// # Example
///
/// ```ignore
/// let system = VendingSystem::new(&config).await?;
/// let session = VendingSession::start(system.api(), &config).await;
/// // ... take orders ...
/// drop(session);
/// system.shutdown().await?;
/// ```
pub struct VendingSystem {
    pub beverage_client: BeverageClient,
    pub condiment_client: CondimentClient,
    pub order_client: OrderClient,
    history_view: usize,
    order_handle: JoinHandle<()>,
    catalog_handles: Vec<JoinHandle<()>>,
}

impl VendingSystem {
    /// Starts every actor and seeds the catalogs with the configured menu.
    ///
    /// # Errors
    /// Fails if the menu lists the same id twice or a negative price.
    pub async fn new(config: &VendingConfig) -> Result<Self, SystemError> {
        let (beverage_actor, beverage_client) = catalog_actor::new_beverages(config);
        let (condiment_actor, condiment_client) = catalog_actor::new_condiments(config);
        let (order_actor, order_client) = order_actor::new(config);
        let beverage_client = BeverageClient::new(beverage_client);
        let condiment_client = CondimentClient::new(condiment_client);

        let catalog_handles = vec![
            tokio::spawn(beverage_actor.run(())),
            tokio::spawn(condiment_actor.run(())),
        ];
        let order_handle = tokio::spawn(
            order_actor.run((beverage_client.clone(), condiment_client.clone())),
        );

        for beverage in config.beverages.iter().cloned() {
            beverage_client.add_beverage(beverage).await?;
        }
        for condiment in config.condiments.iter().cloned() {
            condiment_client.add_condiment(condiment).await?;
        }
        info!(
            beverages = config.beverages.len(),
            condiments = config.condiments.len(),
            history_capacity = config.history_capacity,
            "Vending system started"
        );

        Ok(Self {
            beverage_client,
            condiment_client,
            order_client,
            history_view: config.history_view,
            order_handle,
            catalog_handles,
        })
    }

    /// A [`VendingApi`](crate::clients::VendingApi) served by this system.
    pub fn api(&self) -> LocalVendingApi {
        LocalVendingApi::new(
            self.beverage_client.clone(),
            self.condiment_client.clone(),
            self.order_client.clone(),
            self.history_view,
        )
    }

    /// Stops the order actor, then the catalogs, and waits for each to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down vending system");

        drop(self.order_client);
        Self::join(self.order_handle).await?;

        drop(self.beverage_client);
        drop(self.condiment_client);
        for handle in self.catalog_handles {
            Self::join(handle).await?;
        }

        info!("Vending system stopped");
        Ok(())
    }

    async fn join(handle: JoinHandle<()>) -> Result<(), SystemError> {
        handle.await.map_err(|e| {
            error!(error = %e, "Actor task failed");
            SystemError::ActorTask(e.to_string())
        })
    }
}
