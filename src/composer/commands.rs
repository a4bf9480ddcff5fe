//! Declarative auto-select command lists.
//!
//! A list such as the one built from a [`Recommendation`] is interpreted step by
//! step against the composer. Lists can be written as JSON:
//!
//! ```json
//! [
//!   { "action": "clear" },
//!   { "action": "selectBeverage", "id": "mocha" },
//!   { "action": "setCondimentQuantity", "id": "cream", "quantity": 1 },
//!   { "action": "submit" }
//! ]
//! ```

use super::OrderComposer;
use crate::model::{BeverageId, CondimentId, Recommendation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ComposerCommand {
    Clear,
    SelectBeverage { id: BeverageId },
    SetCondimentQuantity { id: CondimentId, quantity: i64 },
    /// Handled by the session, which owns the backend call.
    Submit,
}

impl OrderComposer {
    /// Applies a selection command. Returns `false` for [`ComposerCommand::Submit`],
    /// which the composer cannot carry out on its own.
    pub fn apply(&mut self, command: &ComposerCommand) -> bool {
        match command {
            ComposerCommand::Clear => self.clear(),
            ComposerCommand::SelectBeverage { id } => {
                // Re-selecting would toggle the drink off.
                if self.selection().beverage.as_ref() != Some(id) {
                    self.select_beverage(id.clone());
                }
            }
            ComposerCommand::SetCondimentQuantity { id, quantity } => {
                self.set_condiment_quantity(id.clone(), *quantity)
            }
            ComposerCommand::Submit => return false,
        }
        true
    }
}

impl Recommendation {
    /// Clear, select the beverage, then add one of each suggested condiment.
    pub fn to_commands(&self) -> Vec<ComposerCommand> {
        let mut commands = vec![
            ComposerCommand::Clear,
            ComposerCommand::SelectBeverage {
                id: self.beverage.clone(),
            },
        ];
        commands.extend(
            self.condiments
                .iter()
                .map(|id| ComposerCommand::SetCondimentQuantity {
                    id: id.clone(),
                    quantity: 1,
                }),
        );
        commands
    }
}
