//! Custom actions shared by the beverage and condiment catalogs.
//!
//! Both catalogs answer the same question for the order actor: what does
//! `quantity` of this item cost right now, and how many calories is that.

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Prices `quantity` units of the entry.
    ///
    /// # Errors
    /// Fails with `InvalidQuantity` for a quantity of zero.
    Quote(u32),
}

/// A priced line, captured at the moment the action ran.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuote {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
    /// Calories for the whole line.
    pub calories: u32,
}

impl CatalogQuote {
    pub(crate) fn new(name: &str, unit_price: Decimal, unit_calories: u32, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
            quantity,
            line_total: unit_price * Decimal::from(quantity),
            calories: unit_calories.saturating_mul(quantity),
        }
    }
}
