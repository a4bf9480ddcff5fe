//! # Order Composer
//!
//! Holds the in-progress selection (one beverage, condiments with quantities),
//! prices it against the catalog, and turns it into the payload sent to the
//! order backend.
//!
//! ## Selection Rules
//!
//! - Selecting the current beverage again deselects it.
//! - Selecting a different beverage drops every condiment.
//! - Condiments can only be set while a beverage is selected. A quantity of
//!   zero or less removes the condiment; any positive quantity is stored as is.
//!
//! Because every mutation goes through these rules, a selection without a
//! beverage never carries condiments.
//!
//! ## Observable Events
//!
//! Problems that are not errors (an unknown id, a condiment set with no drink)
//! are logged and queued as [`ComposerEvent`]s for the presentation layer to
//! pick up with [`OrderComposer::drain_events`].
//!
//! ```rust
//! use vending_machine::composer::{MachineState, OrderComposer, SubmissionPhase};
//! use vending_machine::model::CatalogSnapshot;
//!
//! let mut composer = OrderComposer::new(CatalogSnapshot::default());
//! composer.select_beverage("latte");
//! composer.set_condiment_quantity("vanilla", 2);
//! assert_eq!(composer.machine_state(SubmissionPhase::Idle), MachineState::Selecting);
//!
//! composer.select_beverage("latte");
//! assert!(composer.selection().is_empty());
//! ```

pub mod commands;
pub mod draft;
pub mod error;

pub use commands::*;
pub use draft::*;
pub use error::*;

use crate::model::{
    BeverageId, CatalogSnapshot, CondimentId, CondimentSelection, ItemKind, OrderCreate,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// The user's current, not yet submitted choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub beverage: Option<BeverageId>,
    /// Insertion ordered; each id appears once with a quantity of at least 1.
    pub condiments: Vec<CondimentSelection>,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.beverage.is_none() && self.condiments.is_empty()
    }

    pub fn condiment_quantity(&self, id: &CondimentId) -> Option<u32> {
        self.condiments
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.quantity)
    }
}

/// Non-fatal notices for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// A selected id is not in the catalog. It is priced at zero and blocks submission.
    CatalogLookupMiss { kind: ItemKind, id: String },
    /// A condiment change arrived while no beverage was selected.
    CondimentIgnored { id: CondimentId, quantity: i64 },
}

/// Where the order backend call stands. Owned by whoever performs the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
    Dispensing,
}

/// What the machine shows. Derived from the selection and the submission phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineState {
    Ready,
    Selecting,
    Processing,
    Dispensing,
}

impl MachineState {
    pub fn derive(selection: &SelectionState, phase: SubmissionPhase) -> Self {
        match phase {
            SubmissionPhase::InFlight => MachineState::Processing,
            SubmissionPhase::Dispensing => MachineState::Dispensing,
            SubmissionPhase::Idle if selection.beverage.is_some() => MachineState::Selecting,
            SubmissionPhase::Idle => MachineState::Ready,
        }
    }
}

/// Single-writer owner of the [`SelectionState`].
#[derive(Debug, Default)]
pub struct OrderComposer {
    catalog: CatalogSnapshot,
    selection: SelectionState,
    events: Vec<ComposerEvent>,
}

impl OrderComposer {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
            events: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Replaces the catalog snapshot. The selection is kept as is.
    pub fn set_catalog(&mut self, catalog: CatalogSnapshot) {
        self.catalog = catalog;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn machine_state(&self, phase: SubmissionPhase) -> MachineState {
        MachineState::derive(&self.selection, phase)
    }

    /// Selects `id`, or deselects it when it is already the selected beverage.
    /// Either way the condiments are cleared.
    pub fn select_beverage(&mut self, id: impl Into<BeverageId>) {
        let id = id.into();

        if self.selection.beverage.as_ref() == Some(&id) {
            info!(beverage = %id, "Beverage deselected");
            self.selection = SelectionState::default();
            return;
        }

        if self.catalog.beverage(&id).is_none() {
            self.lookup_miss(ItemKind::Beverage, id.to_string());
        }

        info!(beverage = %id, "Beverage selected");
        self.selection.beverage = Some(id);
        self.selection.condiments.clear();
    }

    /// Sets the quantity of a condiment for the selected beverage.
    ///
    /// Quantities above `u32::MAX` are stored as `u32::MAX`.
    pub fn set_condiment_quantity(&mut self, id: impl Into<CondimentId>, quantity: i64) {
        let id = id.into();

        if self.selection.beverage.is_none() {
            warn!(condiment = %id, quantity, "No beverage selected, condiment ignored");
            self.events.push(ComposerEvent::CondimentIgnored { id, quantity });
            return;
        }

        if quantity <= 0 {
            debug!(condiment = %id, "Condiment removed");
            self.selection.condiments.retain(|entry| entry.id != id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self
            .selection
            .condiments
            .iter()
            .position(|entry| entry.id == id)
        {
            Some(index) => self.selection.condiments[index].quantity = quantity,
            None => {
                if self.catalog.condiment(&id).is_none() {
                    self.lookup_miss(ItemKind::Condiment, id.to_string());
                }
                self.selection.condiments.push(CondimentSelection {
                    id: id.clone(),
                    quantity,
                });
            }
        }
        debug!(condiment = %id, quantity, "Condiment quantity set");
    }

    pub fn clear(&mut self) {
        if !self.selection.is_empty() {
            info!("Selection cleared");
        }
        self.selection = SelectionState::default();
    }

    /// Prices the current selection against `catalog`. Does not touch the selection.
    pub fn compute_draft(&self, catalog: &CatalogSnapshot) -> Result<OrderDraft, ComposerError> {
        draft::build(&self.selection, catalog)
    }

    /// [`compute_draft`](Self::compute_draft) against the composer's own catalog.
    pub fn draft(&self) -> Result<OrderDraft, ComposerError> {
        self.compute_draft(&self.catalog)
    }

    /// Builds the order payload. Condiments keep their insertion order.
    pub fn to_submission_payload(&self) -> Result<OrderCreate, ComposerError> {
        let beverage_id = self
            .selection
            .beverage
            .clone()
            .ok_or(ComposerError::IncompleteSelection)?;

        if self.catalog.beverage(&beverage_id).is_none() {
            return Err(ComposerError::CatalogLookupMiss {
                kind: ItemKind::Beverage,
                id: beverage_id.to_string(),
            });
        }

        if let Some(unknown) = self
            .selection
            .condiments
            .iter()
            .find(|entry| self.catalog.condiment(&entry.id).is_none())
        {
            return Err(ComposerError::CatalogLookupMiss {
                kind: ItemKind::Condiment,
                id: unknown.id.to_string(),
            });
        }

        Ok(OrderCreate {
            beverage_id,
            condiments: self.selection.condiments.clone(),
        })
    }

    /// Called once the backend has accepted the order.
    pub fn on_order_confirmed(&mut self) {
        self.clear();
    }

    pub fn drain_events(&mut self) -> Vec<ComposerEvent> {
        std::mem::take(&mut self.events)
    }

    fn lookup_miss(&mut self, kind: ItemKind, id: String) {
        warn!(?kind, %id, "Selected id is not in the catalog");
        self.events.push(ComposerEvent::CatalogLookupMiss { kind, id });
    }
}
