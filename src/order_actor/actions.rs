//! Custom actions for the Order actor.

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `status`. Returns the updated order.
    ///
    /// # Errors
    /// `InvalidTransition` unless `pending -> processing -> completed`, or
    /// `cancelled` from `pending`/`processing`.
    Advance(OrderStatus),
}
