use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog key of a beverage (`"latte"`, `"greenTea"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeverageId(pub String);

impl From<&str> for BeverageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BeverageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for BeverageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageCategory {
    Coffee,
    Tea,
    Soda,
    Juice,
}

/// A drink the machine can pour.
///
/// # Actor Framework
/// Managed by the beverage catalog actor and keyed by its [`BeverageId`], so two
/// entries can never share an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beverage {
    pub id: BeverageId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub calories: u32,
    pub hot: bool,
    pub category: BeverageCategory,
}

/// Payload for adding a beverage to the catalog. Also the shape of a
/// `[[beverages]]` entry in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageCreate {
    pub id: BeverageId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub calories: u32,
    #[serde(default)]
    pub hot: bool,
    pub category: BeverageCategory,
}

/// Payload for changing an existing beverage. `None` leaves the field alone.
#[derive(Debug, Clone, Default)]
pub struct BeverageUpdate {
    pub price: Option<Decimal>,
    pub calories: Option<u32>,
    pub description: Option<String>,
}
