use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog key of a condiment (`"vanilla"`, `"ice"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CondimentId(pub String);

impl From<&str> for CondimentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CondimentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for CondimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CondimentCategory {
    Dairy,
    Sweetener,
    Syrup,
    Topping,
    Other,
}

/// An add-in for a beverage, ordered by quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condiment {
    pub id: CondimentId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub calories: u32,
    pub category: CondimentCategory,
}

/// Payload for adding a condiment; also a `[[condiments]]` configuration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondimentCreate {
    pub id: CondimentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub calories: u32,
    pub category: CondimentCategory,
}

#[derive(Debug, Clone, Default)]
pub struct CondimentUpdate {
    pub price: Option<Decimal>,
    pub calories: Option<u32>,
    pub description: Option<String>,
}
