//! # Beverage Client
//!
//! High-level API for the beverage catalog actor.
use super::catalog_error;
use crate::catalog_actor::{CatalogAction, CatalogError, CatalogQuote};
use crate::model::{Beverage, BeverageCreate, BeverageId, BeverageUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the beverage catalog actor.
#[derive(Clone)]
pub struct BeverageClient {
    inner: ResourceClient<Beverage>,
}

impl BeverageClient {
    pub fn new(inner: ResourceClient<Beverage>) -> Self {
        Self { inner }
    }

    /// Adds an entry. Fails if the id is already on the menu.
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn add_beverage(&self, params: BeverageCreate) -> Result<BeverageId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_beverage(
        &self,
        id: BeverageId,
        update: BeverageUpdate,
    ) -> Result<Beverage, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Prices `quantity` units at the current catalog price.
    #[instrument(skip(self))]
    pub async fn quote(&self, id: BeverageId, quantity: u32) -> Result<CatalogQuote, CatalogError> {
        debug!("Requesting quote");
        self.inner
            .perform_action(id, CatalogAction::Quote(quantity))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Beverage> for BeverageClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Beverage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        catalog_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_update, MockClient};
    use crate::model::BeverageCategory;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_quote_sends_quantity() {
        let (client, mut receiver) = create_mock_client::<Beverage>(10);
        let beverage_client = BeverageClient::new(client);

        let quote_task =
            tokio::spawn(async move { beverage_client.quote("latte".into(), 1).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, BeverageId::from("latte"));
        assert!(matches!(action, CatalogAction::Quote(1)));

        responder
            .send(Ok(CatalogQuote {
                name: "Latte".into(),
                unit_price: Decimal::new(2200, 2),
                quantity: 1,
                line_total: Decimal::new(2200, 2),
                calories: 120,
            }))
            .unwrap();

        let quote = quote_task.await.unwrap().unwrap();
        assert_eq!(quote.line_total, Decimal::new(2200, 2));
    }

    #[tokio::test]
    async fn test_quote_unknown_beverage() {
        let (client, mut receiver) = create_mock_client::<Beverage>(10);
        let beverage_client = BeverageClient::new(client);

        let quote_task =
            tokio::spawn(async move { beverage_client.quote("espresso".into(), 1).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("espresso".into())))
            .unwrap();

        let result = quote_task.await.unwrap();
        assert_eq!(result, Err(CatalogError::NotFound("espresso".into())));
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let (client, mut receiver) = create_mock_client::<Beverage>(10);
        let beverage_client = BeverageClient::new(client);

        let quote_task =
            tokio::spawn(async move { beverage_client.quote("latte".into(), 0).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                CatalogError::InvalidQuantity("latte".into()),
            ))))
            .unwrap();

        let result = quote_task.await.unwrap();
        assert_eq!(result, Err(CatalogError::InvalidQuantity("latte".into())));
    }

    #[tokio::test]
    async fn test_update_sends_changed_fields() {
        let (client, mut receiver) = create_mock_client::<Beverage>(10);
        let beverage_client = BeverageClient::new(client);

        let update_task = tokio::spawn(async move {
            beverage_client
                .update_beverage(
                    "latte".into(),
                    BeverageUpdate {
                        price: Some(Decimal::new(2400, 2)),
                        ..BeverageUpdate::default()
                    },
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, BeverageId::from("latte"));
        assert_eq!(update.price, Some(Decimal::new(2400, 2)));
        assert!(update.calories.is_none());
        assert!(update.description.is_none());

        responder
            .send(Ok(Beverage {
                id: "latte".into(),
                name: "Latte".into(),
                description: String::new(),
                price: Decimal::new(2400, 2),
                calories: 120,
                hot: true,
                category: BeverageCategory::Coffee,
            }))
            .unwrap();

        let updated = update_task.await.unwrap().unwrap();
        assert_eq!(updated.price, Decimal::new(2400, 2));
    }

    #[tokio::test]
    async fn test_update_negative_price_is_recovered() {
        let mut mock = MockClient::<Beverage>::new();
        mock.expect_update(BeverageId::from("latte"))
            .return_err(FrameworkError::EntityError(Box::new(
                CatalogError::InvalidPrice {
                    id: "latte".into(),
                    price: "-1".into(),
                },
            )));
        let beverage_client = BeverageClient::new(mock.client());

        let result = beverage_client
            .update_beverage(
                "latte".into(),
                BeverageUpdate {
                    price: Some(Decimal::from(-1)),
                    ..BeverageUpdate::default()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(CatalogError::InvalidPrice {
                id: "latte".into(),
                price: "-1".into(),
            })
        );
        mock.verify();
    }
}
