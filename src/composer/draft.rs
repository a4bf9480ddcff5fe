//! Pricing of a selection against a catalog snapshot.

use super::{ComposerError, SelectionState};
use crate::model::{CatalogSnapshot, ItemKind};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// One row of the order summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    pub kind: ItemKind,
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
    /// Calories for the whole line (per-unit calories times quantity).
    pub calories: u32,
    /// The id was not found in the catalog; the line is priced at zero.
    pub missing: bool,
}

impl DraftLine {
    fn priced(
        kind: ItemKind,
        id: String,
        name: String,
        unit_price: Decimal,
        calories: u32,
        quantity: u32,
    ) -> Self {
        Self {
            kind,
            id,
            name,
            unit_price,
            quantity,
            line_total: unit_price * Decimal::from(quantity),
            calories: calories.saturating_mul(quantity),
            missing: false,
        }
    }

    fn missing(kind: ItemKind, id: String, quantity: u32) -> Self {
        warn!(?kind, %id, "Catalog lookup miss, pricing line at zero");
        Self {
            kind,
            name: id.clone(),
            id,
            unit_price: Decimal::ZERO,
            quantity,
            line_total: Decimal::ZERO,
            calories: 0,
            missing: true,
        }
    }
}

/// The summary view of a selection: beverage line first, then condiments in
/// the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub lines: Vec<DraftLine>,
    pub total_price: Decimal,
    pub total_calories: u32,
}

impl OrderDraft {
    pub fn has_missing_items(&self) -> bool {
        self.lines.iter().any(|line| line.missing)
    }
}

pub(crate) fn build(
    selection: &SelectionState,
    catalog: &CatalogSnapshot,
) -> Result<OrderDraft, ComposerError> {
    let beverage_id = selection
        .beverage
        .as_ref()
        .ok_or(ComposerError::IncompleteSelection)?;

    let mut lines = Vec::with_capacity(1 + selection.condiments.len());

    lines.push(match catalog.beverage(beverage_id) {
        Some(b) => DraftLine::priced(
            ItemKind::Beverage,
            b.id.to_string(),
            b.name.clone(),
            b.price,
            b.calories,
            1,
        ),
        None => DraftLine::missing(ItemKind::Beverage, beverage_id.to_string(), 1),
    });

    for entry in &selection.condiments {
        lines.push(match catalog.condiment(&entry.id) {
            Some(c) => DraftLine::priced(
                ItemKind::Condiment,
                c.id.to_string(),
                c.name.clone(),
                c.price,
                c.calories,
                entry.quantity,
            ),
            None => {
                DraftLine::missing(ItemKind::Condiment, entry.id.to_string(), entry.quantity)
            }
        });
    }

    let total_price = lines.iter().map(|line| line.line_total).sum();
    let total_calories = lines
        .iter()
        .fold(0u32, |acc, line| acc.saturating_add(line.calories));

    Ok(OrderDraft {
        lines,
        total_price,
        total_calories,
    })
}
