use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use vending_machine::clients::{ApiError, VendingApi};
use vending_machine::composer::{ComposerCommand, ComposerError, MachineState};
use vending_machine::config::VendingConfig;
use vending_machine::lifecycle::{SystemError, VendingSystem};
use vending_machine::model::{
    BeverageCategory, BeverageCreate, BeverageId, CatalogSnapshot, CondimentCategory,
    CondimentCreate, CondimentId, ItemKind, Order, OrderCreate, OrderId, Recommendation,
};
use vending_machine::session::VendingSession;

fn latte_menu() -> VendingConfig {
    VendingConfig {
        dispense_delay_ms: 0,
        beverages: vec![
            BeverageCreate {
                id: "latte".into(),
                name: "Latte".into(),
                description: String::new(),
                price: Decimal::new(2000, 2),
                calories: 150,
                hot: true,
                category: BeverageCategory::Coffee,
            },
            BeverageCreate {
                id: "mocha".into(),
                name: "Mocha".into(),
                description: String::new(),
                price: Decimal::new(2500, 2),
                calories: 200,
                hot: true,
                category: BeverageCategory::Coffee,
            },
        ],
        condiments: vec![
            CondimentCreate {
                id: "vanilla".into(),
                name: "Vanilla Syrup".into(),
                description: String::new(),
                price: Decimal::new(200, 2),
                calories: 10,
                category: CondimentCategory::Syrup,
            },
            CondimentCreate {
                id: "cream".into(),
                name: "Cream".into(),
                description: String::new(),
                price: Decimal::new(400, 2),
                calories: 120,
                category: CondimentCategory::Dairy,
            },
        ],
        ..VendingConfig::default()
    }
}

/// Full end-to-end run with all real actors.
#[tokio::test]
async fn test_latte_with_vanilla_end_to_end() {
    let config = latte_menu();
    let system = VendingSystem::new(&config).await.unwrap();
    let mut session = VendingSession::start(system.api(), &config).await;

    assert!(session.catalog_error().is_none());
    assert_eq!(session.state(), MachineState::Ready);

    session.composer_mut().select_beverage("latte");
    session.composer_mut().set_condiment_quantity("vanilla", 2);
    assert_eq!(session.state(), MachineState::Selecting);

    let draft = session.draft().unwrap();
    assert_eq!(draft.lines.len(), 2);
    assert_eq!(draft.total_price, Decimal::new(2400, 2));
    assert_eq!(draft.total_calories, 170);

    let order = session.submit().await.unwrap();
    assert_eq!(order.total, Decimal::new(2400, 2));
    assert_eq!(order.total_calories, 170);
    assert!(session.composer().selection().is_empty());
    assert_eq!(session.state(), MachineState::Dispensing);

    // Caches were refreshed after the order.
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].id, order.id);
    let recommendation = session.recommendation().unwrap();
    assert_eq!(recommendation.beverage, BeverageId::from("latte"));
    assert_eq!(recommendation.condiments, vec![CondimentId::from("vanilla")]);

    session.dispense().await;
    assert_eq!(session.state(), MachineState::Ready);

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_history_view_is_newest_orders() {
    let config = VendingConfig {
        history_capacity: 4,
        history_view: 2,
        ..latte_menu()
    };
    let system = VendingSystem::new(&config).await.unwrap();
    let mut session = VendingSession::start(system.api(), &config).await;

    for _ in 0..5 {
        session.composer_mut().select_beverage("mocha");
        session.submit().await.unwrap();
        session.finish_dispensing();
    }

    let shown: Vec<OrderId> = session.history().iter().map(|o| o.id).collect();
    assert_eq!(shown, vec![OrderId(4), OrderId(5)]);
    assert_eq!(system.api().fetch_order_history().await.unwrap().len(), 2);

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_command_list_places_order() {
    let config = latte_menu();
    let system = VendingSystem::new(&config).await.unwrap();
    let mut session = VendingSession::start(system.api(), &config).await;

    let commands: Vec<ComposerCommand> = serde_json::from_str(
        r#"[
            { "action": "selectBeverage", "id": "mocha" },
            { "action": "setCondimentQuantity", "id": "cream", "quantity": 1 },
            { "action": "submit" }
        ]"#,
    )
    .unwrap();

    let placed = session.run_commands(&commands).await.unwrap().unwrap();
    assert_eq!(placed.total, Decimal::new(2900, 2));
    assert_eq!(placed.items[1].kind, ItemKind::Condiment);

    // Recommendation now points at the mocha with cream; apply it.
    session.finish_dispensing();
    session.apply_recommendation().await.unwrap();
    let selection = session.composer().selection();
    assert_eq!(selection.beverage, Some(BeverageId::from("mocha")));
    assert_eq!(selection.condiment_quantity(&CondimentId::from("cream")), Some(1));

    drop(session);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_menu_entry_fails_startup() {
    let mut config = latte_menu();
    config.beverages.push(config.beverages[0].clone());

    let result = VendingSystem::new(&config).await;
    assert!(matches!(result, Err(SystemError::Seed(_))));
}

/// A backend that fails the first `failures` submissions, then accepts.
struct FlakyApi {
    catalog: CatalogSnapshot,
    failures: AtomicUsize,
}

impl FlakyApi {
    async fn new(failures: usize) -> Self {
        let config = latte_menu();
        let system = VendingSystem::new(&config).await.unwrap();
        let catalog = system.api().fetch_catalog().await.unwrap();
        system.shutdown().await.unwrap();
        Self {
            catalog,
            failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl VendingApi for FlakyApi {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ApiError> {
        Ok(self.catalog.clone())
    }

    async fn submit_order(&self, _payload: &OrderCreate) -> Result<Order, ApiError> {
        let left = self.failures.load(Ordering::SeqCst);
        if left > 0 {
            self.failures.store(left - 1, Ordering::SeqCst);
            return Err(ApiError::Unavailable("payment terminal offline".into()));
        }
        let now = chrono::Utc::now();
        Ok(Order {
            id: OrderId(1),
            items: vec![],
            total: Decimal::ZERO,
            total_calories: 0,
            status: vending_machine::model::OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    async fn fetch_order_history(&self) -> Result<Vec<Order>, ApiError> {
        Err(ApiError::Unavailable("history offline".into()))
    }

    async fn fetch_recommendation(&self) -> Result<Recommendation, ApiError> {
        Err(ApiError::Unavailable("recommendations offline".into()))
    }
}

#[tokio::test]
async fn test_failed_submission_keeps_selection() {
    let config = latte_menu();
    let mut session = VendingSession::start(FlakyApi::new(1).await, &config).await;

    session.composer_mut().select_beverage("latte");
    session.composer_mut().set_condiment_quantity("vanilla", 2);
    let before = session.composer().selection().clone();

    let result = session.submit().await;
    assert!(
        matches!(result, Err(ComposerError::SubmissionFailed(ref msg)) if msg.contains("offline"))
    );
    assert_eq!(session.composer().selection(), &before);
    assert_eq!(session.state(), MachineState::Selecting);

    // Retry succeeds; refresh failures are not fatal.
    let order = session.submit().await.unwrap();
    assert_eq!(order.id, OrderId(1));
    assert!(session.composer().selection().is_empty());
    assert!(session.history().is_empty());
    assert!(session.recommendation().is_none());
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let config = latte_menu();
    let mut session = VendingSession::start(FlakyApi::new(0).await, &config).await;

    session.composer_mut().select_beverage("latte");
    let payload = session.begin_submit().unwrap();
    assert_eq!(session.state(), MachineState::Processing);
    let before = session.composer().selection().clone();

    assert_eq!(session.begin_submit(), Err(ComposerError::SubmissionInProgress));
    assert_eq!(session.composer().selection(), &before);
    assert_eq!(session.state(), MachineState::Processing);

    assert_eq!(payload.beverage_id, BeverageId::from("latte"));
    session
        .complete_submit(Err(ApiError::Rejected("card declined".into())))
        .unwrap_err();
    assert_eq!(session.state(), MachineState::Selecting);
    assert!(session.begin_submit().is_ok());
}

#[tokio::test]
async fn test_result_without_submission_is_ignored() {
    let config = latte_menu();
    let mut session = VendingSession::start(FlakyApi::new(0).await, &config).await;

    session.composer_mut().select_beverage("latte");
    let before = session.composer().selection().clone();

    let stray_api = FlakyApi::new(0).await;
    let stray = stray_api
        .submit_order(&OrderCreate {
            beverage_id: "latte".into(),
            condiments: vec![],
        })
        .await;
    let result = session.complete_submit(stray);
    assert_eq!(result, Err(ComposerError::NoSubmissionInFlight));
    assert_eq!(session.composer().selection(), &before);
    assert_eq!(session.state(), MachineState::Selecting);
    assert!(session.last_order().is_none());

    // A real submission still goes through afterwards.
    let order = session.submit().await.unwrap();
    assert_eq!(session.last_order(), Some(&order));
    assert_eq!(session.state(), MachineState::Dispensing);

    // And a late answer while dispensing changes nothing either.
    let late = session.complete_submit(Ok(order.clone()));
    assert_eq!(late, Err(ComposerError::NoSubmissionInFlight));
    assert_eq!(session.state(), MachineState::Dispensing);
}

#[tokio::test]
async fn test_missing_beverage_is_not_sent() {
    let config = latte_menu();
    let api = FlakyApi::new(0).await;
    let mut session = VendingSession::start(api, &config).await;

    session.composer_mut().set_condiment_quantity("vanilla", 1);
    assert_eq!(session.submit().await, Err(ComposerError::IncompleteSelection));
    assert_eq!(session.state(), MachineState::Ready);
}

struct OfflineApi;

#[async_trait]
impl VendingApi for OfflineApi {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ApiError> {
        Err(ApiError::Unavailable("catalog offline".into()))
    }

    async fn submit_order(&self, _payload: &OrderCreate) -> Result<Order, ApiError> {
        Err(ApiError::Unavailable("offline".into()))
    }

    async fn fetch_order_history(&self) -> Result<Vec<Order>, ApiError> {
        Ok(vec![])
    }

    async fn fetch_recommendation(&self) -> Result<Recommendation, ApiError> {
        Err(ApiError::Unavailable("offline".into()))
    }
}

#[tokio::test]
async fn test_catalog_failure_is_surfaced() {
    let mut session = VendingSession::start(OfflineApi, &latte_menu()).await;

    assert!(matches!(session.catalog_error(), Some(ApiError::Unavailable(_))));
    assert!(session.catalog().is_empty());

    session.composer_mut().select_beverage("latte");
    let draft = session.draft().unwrap();
    assert!(draft.lines[0].missing);
    assert_eq!(draft.total_price, Decimal::ZERO);

    assert!(matches!(
        session.submit().await,
        Err(ComposerError::CatalogLookupMiss { kind: ItemKind::Beverage, .. })
    ));
    assert_eq!(session.state(), MachineState::Selecting);
}
