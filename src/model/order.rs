//! Placed orders and the payload that creates them.
//!
//! [`Order`] is managed by the order actor, which assigns the [`OrderId`] from
//! its sequence counter and prices the items in its `on_create` hook. See
//! `crate::order_actor` for the lifecycle.

use crate::model::{BeverageId, CondimentId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Later orders have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Orders move `pending -> processing -> completed`, and may be cancelled
    /// until they complete.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Processing, Completed)
                | (Pending, Cancelled)
                | (Processing, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Beverage,
    Condiment,
}

/// One priced line of a placed order. The unit price is the catalog price at
/// the time the order was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub calories: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub total_calories: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The id of the beverage line, if the order has one.
    pub fn beverage_id(&self) -> Option<BeverageId> {
        self.items
            .iter()
            .find(|item| item.kind == ItemKind::Beverage)
            .map(|item| BeverageId(item.id.clone()))
    }

    /// Condiment lines as `(id, quantity)`, in order.
    pub fn condiments(&self) -> impl Iterator<Item = (CondimentId, u32)> + '_ {
        self.items
            .iter()
            .filter(|item| item.kind == ItemKind::Condiment)
            .map(|item| (CondimentId(item.id.clone()), item.quantity))
    }
}

/// A condiment entry of a selection or payload. `quantity` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondimentSelection {
    pub id: CondimentId,
    pub quantity: u32,
}

/// The submission payload: `{"beverageId": .., "condiments": [{"id", "quantity"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub beverage_id: BeverageId,
    pub condiments: Vec<CondimentSelection>,
}
