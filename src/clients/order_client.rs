use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Pricing and catalog validation happen in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored, priced and `pending`.
    #[instrument(skip(self, payload), fields(beverage = %payload.beverage_id))]
    pub async fn place_order(&self, payload: OrderCreate) -> Result<Order, OrderError> {
        debug!(?payload, "Sending create request");
        let id = self.inner.create(payload).await.map_err(Self::map_error)?;
        info!(order = %id, "Order placed");

        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Advance(status))
            .await
            .map_err(Self::map_error)
    }

    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        self.advance(id, OrderStatus::Cancelled).await
    }

    /// The newest `count` orders, oldest first.
    #[instrument(skip(self))]
    pub async fn recent(&self, count: usize) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        let skip = orders.len().saturating_sub(count);
        Ok(orders.split_off(skip))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, OrderItem};
    use actor_framework::mock::{create_mock_client, expect_action, expect_list};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(id: u32) -> Order {
        let now = Utc::now();
        Order {
            id: OrderId(id),
            items: vec![OrderItem {
                id: "coffee".into(),
                kind: ItemKind::Beverage,
                name: "Coffee".into(),
                quantity: 1,
                unit_price: Decimal::new(1800, 2),
                calories: 5,
            }],
            total: Decimal::new(1800, 2),
            total_calories: 5,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_recent_keeps_newest() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.recent(2).await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder
            .send(Ok((1..=4).map(order).collect()))
            .unwrap();

        let ids: Vec<OrderId> = task.await.unwrap().unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![OrderId(3), OrderId(4)]);
    }

    #[tokio::test]
    async fn test_advance_surfaces_invalid_transition() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.cancel(OrderId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(1));
        assert!(matches!(action, OrderAction::Advance(OrderStatus::Cancelled)));

        let error = OrderError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Cancelled,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(error.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(error));
    }
}
