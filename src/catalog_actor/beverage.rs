//! [`ActorEntity`] implementation for [`Beverage`].
//!
//! Beverages are keyed by their catalog id, so `assign_id` ignores the sequence
//! number and the actor refuses a second entry with the same id.

use super::actions::{CatalogAction, CatalogQuote};
use super::error::CatalogError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use crate::model::{Beverage, BeverageCreate, BeverageId, BeverageUpdate};
use rust_decimal::Decimal;

fn check_price(id: &BeverageId, price: Decimal) -> Result<Decimal, CatalogError> {
    if price.is_sign_negative() {
        return Err(CatalogError::InvalidPrice {
            id: id.to_string(),
            price: price.to_string(),
        });
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Beverage {
    type Id = BeverageId;
    type Create = BeverageCreate;
    type Update = BeverageUpdate;
    type Action = CatalogAction;
    type ActionResult = CatalogQuote;
    type Context = ();
    type Error = CatalogError;

    fn assign_id(_seq: u32, params: &BeverageCreate) -> BeverageId {
        params.id.clone()
    }

    fn from_create_params(id: BeverageId, params: BeverageCreate) -> Result<Self, CatalogError> {
        let price = check_price(&id, params.price)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price,
            calories: params.calories,
            hot: params.hot,
            category: params.category,
        })
    }

    /// Applies whichever of `price`, `calories` and `description` are set.
    async fn on_update(&mut self, update: BeverageUpdate, _ctx: &()) -> Result<(), CatalogError> {
        if let Some(price) = update.price {
            self.price = check_price(&self.id, price)?;
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogQuote, CatalogError> {
        match action {
            CatalogAction::Quote(0) => Err(CatalogError::InvalidQuantity(self.id.to_string())),
            CatalogAction::Quote(quantity) => Ok(CatalogQuote::new(
                &self.name,
                self.price,
                self.calories,
                quantity,
            )),
        }
    }
}
