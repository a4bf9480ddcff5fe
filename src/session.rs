//! # Vending Session
//!
//! The controller behind the machine's screen. It owns the [`OrderComposer`],
//! the submission phase, and cached copies of what the backend knows (catalog,
//! recent orders, the current recommendation).
//!
//! ## Submission
//!
//! A submission is split in two so that a second attempt can be refused while
//! the first is still waiting on the backend:
//!
//! 1. [`begin_submit`](VendingSession::begin_submit) validates the selection
//!    and marks the submission in flight.
//! 2. [`complete_submit`](VendingSession::complete_submit) takes the backend's
//!    answer. Success clears the selection and starts dispensing; failure keeps
//!    the selection so the user can retry.
//!
//! [`submit`](VendingSession::submit) runs both around the backend call and
//! then refreshes the history and recommendation caches.

use crate::clients::{ApiError, VendingApi};
use crate::composer::{
    ComposerCommand, ComposerError, MachineState, OrderComposer, OrderDraft, SubmissionPhase,
};
use crate::config::VendingConfig;
use crate::model::{CatalogSnapshot, Order, OrderCreate, Recommendation};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub struct VendingSession<A: VendingApi> {
    api: A,
    composer: OrderComposer,
    phase: SubmissionPhase,
    dispense_delay: Duration,
    catalog_error: Option<ApiError>,
    history: Vec<Order>,
    recommendation: Option<Recommendation>,
    last_order: Option<Order>,
}

impl<A: VendingApi> VendingSession<A> {
    /// Fetches the catalog once. A failed fetch leaves the catalog empty and is
    /// reported through [`catalog_error`](Self::catalog_error); it is not retried.
    #[instrument(skip_all)]
    pub async fn start(api: A, config: &VendingConfig) -> Self {
        let (catalog, catalog_error) = match api.fetch_catalog().await {
            Ok(catalog) => {
                info!(
                    beverages = catalog.beverages.len(),
                    condiments = catalog.condiments.len(),
                    "Session started"
                );
                (catalog, None)
            }
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, starting with an empty menu");
                (CatalogSnapshot::default(), Some(e))
            }
        };

        Self {
            api,
            composer: OrderComposer::new(catalog),
            phase: SubmissionPhase::Idle,
            dispense_delay: config.dispense_delay(),
            catalog_error,
            history: Vec::new(),
            recommendation: None,
            last_order: None,
        }
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        self.composer.catalog()
    }

    pub fn catalog_error(&self) -> Option<&ApiError> {
        self.catalog_error.as_ref()
    }

    pub fn composer(&self) -> &OrderComposer {
        &self.composer
    }

    /// Direct access for selection changes. The composer does not block them
    /// while a submission is in flight; the screen is expected to.
    pub fn composer_mut(&mut self) -> &mut OrderComposer {
        &mut self.composer
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn state(&self) -> MachineState {
        self.composer.machine_state(self.phase)
    }

    pub fn draft(&self) -> Result<OrderDraft, ComposerError> {
        self.composer.draft()
    }

    pub fn history(&self) -> &[Order] {
        &self.history
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn last_order(&self) -> Option<&Order> {
        self.last_order.as_ref()
    }

    /// Validates the selection and marks a submission in flight.
    ///
    /// Nothing changes when an error is returned.
    pub fn begin_submit(&mut self) -> Result<OrderCreate, ComposerError> {
        if self.phase == SubmissionPhase::InFlight {
            warn!("Submission already in flight, ignoring");
            return Err(ComposerError::SubmissionInProgress);
        }

        let payload = self.composer.to_submission_payload()?;
        self.phase = SubmissionPhase::InFlight;
        info!(
            beverage = %payload.beverage_id,
            condiments = payload.condiments.len(),
            "Submitting order"
        );
        Ok(payload)
    }

    /// Records the backend's answer to the submission started by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// An answer that arrives while nothing is in flight is dropped and the
    /// selection and phase stay as they are.
    pub fn complete_submit(
        &mut self,
        result: Result<Order, ApiError>,
    ) -> Result<Order, ComposerError> {
        if self.phase != SubmissionPhase::InFlight {
            warn!(phase = ?self.phase, ok = result.is_ok(), "No submission in flight, ignoring result");
            return Err(ComposerError::NoSubmissionInFlight);
        }

        match result {
            Ok(order) => {
                info!(order = %order.id, total = %order.total, "Order confirmed, dispensing");
                self.composer.on_order_confirmed();
                self.phase = SubmissionPhase::Dispensing;
                self.last_order = Some(order.clone());
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "Order failed, selection kept");
                self.phase = SubmissionPhase::Idle;
                Err(ComposerError::SubmissionFailed(e.to_string()))
            }
        }
    }

    /// Submits the current selection and, on success, refreshes the cached
    /// history and recommendation.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Order, ComposerError> {
        let payload = self.begin_submit()?;
        let result = self.api.submit_order(&payload).await;
        let order = self.complete_submit(result)?;

        if let Err(e) = self.refresh_history().await {
            warn!(error = %e, "History refresh failed");
        }
        if let Err(e) = self.refresh_recommendation().await {
            warn!(error = %e, "Recommendation refresh failed");
        }
        Ok(order)
    }

    /// Leaves `dispensing`. Does nothing in any other phase.
    pub fn finish_dispensing(&mut self) {
        if self.phase == SubmissionPhase::Dispensing {
            info!("Dispensing finished");
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Waits out the dispense delay, then returns to `ready`.
    pub async fn dispense(&mut self) {
        if self.phase != SubmissionPhase::Dispensing {
            return;
        }
        tokio::time::sleep(self.dispense_delay).await;
        self.finish_dispensing();
    }

    pub async fn refresh_history(&mut self) -> Result<&[Order], ApiError> {
        self.history = self.api.fetch_order_history().await?;
        Ok(&self.history)
    }

    pub async fn refresh_recommendation(&mut self) -> Result<&Recommendation, ApiError> {
        let recommendation = self.api.fetch_recommendation().await?;
        info!(
            beverage = %recommendation.beverage,
            reason = %recommendation.reason,
            "Recommendation updated"
        );
        let cached: &Recommendation = self.recommendation.insert(recommendation);
        Ok(cached)
    }

    /// Runs a command list in order and returns the last order it placed.
    /// Stops at the first failed submission.
    #[instrument(skip_all, fields(commands = commands.len()))]
    pub async fn run_commands(
        &mut self,
        commands: &[ComposerCommand],
    ) -> Result<Option<Order>, ComposerError> {
        let mut placed = None;
        for command in commands {
            if !self.composer.apply(command) {
                placed = Some(self.submit().await?);
            }
        }
        Ok(placed)
    }

    /// Loads the cached recommendation into the selection.
    pub async fn apply_recommendation(&mut self) -> Result<(), ComposerError> {
        let Some(commands) = self.recommendation.as_ref().map(Recommendation::to_commands) else {
            return Ok(());
        };
        self.run_commands(&commands).await.map(|_| ())
    }
}
