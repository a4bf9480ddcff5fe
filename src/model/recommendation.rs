use crate::model::{BeverageId, CondimentId};
use serde::{Deserialize, Serialize};

/// A suggested drink, derived from the order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub beverage: BeverageId,
    pub condiments: Vec<CondimentId>,
    pub reason: String,
}
