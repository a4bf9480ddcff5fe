//! [`ActorEntity`] implementation for [`Order`].
//!
//! `from_create_params` lays out one unpriced item per payload line; the
//! `on_create` hook then quotes every item through the catalog actors held in
//! the context and fills in names, unit prices and calories. An item the
//! catalogs do not know rejects the whole order.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::catalog_actor::CatalogError;
use crate::clients::{BeverageClient, CondimentClient};
use crate::model::{ItemKind, Order, OrderCreate, OrderId, OrderItem, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

fn unpriced(id: String, kind: ItemKind, quantity: u32) -> OrderItem {
    OrderItem {
        name: id.clone(),
        id,
        kind,
        quantity,
        unit_price: Decimal::ZERO,
        calories: 0,
    }
}

fn quote_error(kind: ItemKind, e: CatalogError) -> OrderError {
    match (kind, e) {
        (ItemKind::Beverage, CatalogError::NotFound(id)) => OrderError::InvalidBeverage(id),
        (ItemKind::Condiment, CatalogError::NotFound(id)) => OrderError::InvalidCondiment(id),
        (_, other) => OrderError::CatalogUnavailable(other.to_string()),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (BeverageClient, CondimentClient);
    type Error = OrderError;

    fn assign_id(seq: u32, _params: &OrderCreate) -> OrderId {
        OrderId(seq)
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let mut items = vec![unpriced(params.beverage_id.0, ItemKind::Beverage, 1)];
        items.extend(
            params
                .condiments
                .into_iter()
                .filter(|c| c.quantity > 0)
                .map(|c| unpriced(c.id.0, ItemKind::Condiment, c.quantity)),
        );

        let now = Utc::now();
        Ok(Self {
            id,
            items,
            total: Decimal::ZERO,
            total_calories: 0,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (beverages, condiments) = ctx;

        for item in &mut self.items {
            let quote = match item.kind {
                ItemKind::Beverage => beverages.quote(item.id.clone().into(), item.quantity).await,
                ItemKind::Condiment => condiments.quote(item.id.clone().into(), item.quantity).await,
            }
            .map_err(|e| quote_error(item.kind, e))?;

            debug!(order = %self.id, item = %item.id, total = %quote.line_total, "Item priced");
            item.name = quote.name;
            item.unit_price = quote.unit_price;
            item.calories = quote.calories;
        }

        self.total = self.items.iter().map(OrderItem::line_total).sum();
        self.total_calories = self
            .items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.calories));
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::Advance(next) => {
                if !self.status.can_advance_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                self.updated_at = Utc::now();
                Ok(self.clone())
            }
        }
    }
}
