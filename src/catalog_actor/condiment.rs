//! [`ActorEntity`] implementation for [`Condiment`]. Same rules as beverages.

use super::actions::{CatalogAction, CatalogQuote};
use super::error::CatalogError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use crate::model::{Condiment, CondimentCreate, CondimentId, CondimentUpdate};

#[async_trait]
impl ActorEntity for Condiment {
    type Id = CondimentId;
    type Create = CondimentCreate;
    type Update = CondimentUpdate;
    type Action = CatalogAction;
    type ActionResult = CatalogQuote;
    type Context = ();
    type Error = CatalogError;

    fn assign_id(_seq: u32, params: &CondimentCreate) -> CondimentId {
        params.id.clone()
    }

    fn from_create_params(id: CondimentId, params: CondimentCreate) -> Result<Self, CatalogError> {
        if params.price.is_sign_negative() {
            return Err(CatalogError::InvalidPrice {
                id: id.to_string(),
                price: params.price.to_string(),
            });
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            calories: params.calories,
            category: params.category,
        })
    }

    async fn on_update(&mut self, update: CondimentUpdate, _ctx: &()) -> Result<(), CatalogError> {
        if let Some(price) = update.price {
            if price.is_sign_negative() {
                return Err(CatalogError::InvalidPrice {
                    id: self.id.to_string(),
                    price: price.to_string(),
                });
            }
            self.price = price;
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
