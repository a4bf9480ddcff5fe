//! The read-only menu a session works against.

use crate::model::{Beverage, BeverageId, Condiment, CondimentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Beverages and condiments keyed by id, fetched once per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub beverages: BTreeMap<BeverageId, Beverage>,
    pub condiments: BTreeMap<CondimentId, Condiment>,
}

impl CatalogSnapshot {
    pub fn new(
        beverages: impl IntoIterator<Item = Beverage>,
        condiments: impl IntoIterator<Item = Condiment>,
    ) -> Self {
        Self {
            beverages: beverages.into_iter().map(|b| (b.id.clone(), b)).collect(),
            condiments: condiments.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    pub fn beverage(&self, id: &BeverageId) -> Option<&Beverage> {
        self.beverages.get(id)
    }

    pub fn condiment(&self, id: &CondimentId) -> Option<&Condiment> {
        self.condiments.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.beverages.is_empty() && self.condiments.is_empty()
    }
}
