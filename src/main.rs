//! Demo run: one customer orders a latte with vanilla, then checks their
//! history and what the machine suggests next.

use std::process::ExitCode;
use tracing::{error, info, Instrument};
use vending_machine::config::VendingConfig;
use vending_machine::lifecycle::{setup_tracing, VendingSystem};
use vending_machine::session::VendingSession;

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Vending machine stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = VendingConfig::from_env()?;
    let system = VendingSystem::new(&config).await?;
    let mut session = VendingSession::start(system.api(), &config).await;

    if let Some(e) = session.catalog_error() {
        error!(error = %e, "Menu could not be loaded");
    }

    let span = tracing::info_span!("customer_order");
    async {
        let composer = session.composer_mut();
        composer.select_beverage("latte");
        composer.set_condiment_quantity("vanilla", 2);

        let draft = session.draft()?;
        for line in &draft.lines {
            info!(
                item = %line.name,
                quantity = line.quantity,
                line_total = %line.line_total,
                "Summary line"
            );
        }
        info!(total = %draft.total_price, calories = draft.total_calories, "Order summary");

        let order = session.submit().await?;
        info!(order = %order.id, status = %order.status, state = ?session.state(), "Paid");

        session.dispense().await;
        info!(state = ?session.state(), "Enjoy your drink");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    for order in session.history() {
        info!(order = %order.id, total = %order.total, status = %order.status, "History");
    }
    if let Some(rec) = session.recommendation() {
        info!(beverage = %rec.beverage, condiments = ?rec.condiments, reason = %rec.reason, "Next time");
    }

    drop(session);
    system.shutdown().await?;
    Ok(())
}
