use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use rust_decimal::Decimal;
use vending_machine::catalog_actor::CatalogQuote;
use vending_machine::clients::{BeverageClient, CondimentClient};
use vending_machine::config::VendingConfig;
use vending_machine::model::{
    Beverage, BeverageId, Condiment, CondimentId, CondimentSelection, ItemKind, OrderCreate,
    OrderId, OrderStatus,
};
use vending_machine::order_actor::{self, OrderError};

fn quote(name: &str, cents: i64, calories: u32, quantity: u32) -> CatalogQuote {
    let unit_price = Decimal::new(cents, 2);
    CatalogQuote {
        name: name.to_string(),
        unit_price,
        quantity,
        line_total: unit_price * Decimal::from(quantity),
        calories: calories * quantity,
    }
}

fn plain(beverage: &str) -> OrderCreate {
    OrderCreate {
        beverage_id: beverage.into(),
        condiments: vec![],
    }
}

/// Real Order actor with mocked catalog actors: exercises the pricing done in
/// `Order::on_create` without a real menu.
#[tokio::test]
async fn test_order_is_priced_through_catalogs() {
    let mut beverages = MockClient::<Beverage>::new();
    let mut condiments = MockClient::<Condiment>::new();

    beverages
        .expect_action(BeverageId::from("latte"))
        .return_ok(quote("Latte", 2000, 150, 1));
    condiments
        .expect_action(CondimentId::from("vanilla"))
        .return_ok(quote("Vanilla Syrup", 200, 10, 2));

    let (order_actor, order_client) = order_actor::new(&VendingConfig::default());
    let handle = tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    let order = order_client
        .place_order(OrderCreate {
            beverage_id: "latte".into(),
            condiments: vec![CondimentSelection {
                id: "vanilla".into(),
                quantity: 2,
            }],
        })
        .await
        .expect("order should be placed");

    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].kind, ItemKind::Beverage);
    assert_eq!(order.items[0].name, "Latte");
    assert_eq!(order.items[1].unit_price, Decimal::new(200, 2));
    assert_eq!(order.total, Decimal::new(2400, 2));
    assert_eq!(order.total_calories, 170);

    beverages.verify();
    condiments.verify();

    drop(order_client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_condiment_rejects_order() {
    let mut beverages = MockClient::<Beverage>::new();
    let mut condiments = MockClient::<Condiment>::new();

    beverages
        .expect_action(BeverageId::from("coffee"))
        .return_ok(quote("Coffee", 1800, 5, 1));
    condiments
        .expect_action(CondimentId::from("saffron"))
        .return_err(FrameworkError::NotFound("saffron".into()));

    let (order_actor, order_client) = order_actor::new(&VendingConfig::default());
    tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    let result = order_client
        .place_order(OrderCreate {
            beverage_id: "coffee".into(),
            condiments: vec![CondimentSelection {
                id: "saffron".into(),
                quantity: 1,
            }],
        })
        .await;

    assert_eq!(result, Err(OrderError::InvalidCondiment("saffron".into())));
    assert!(order_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_beverage_rejects_order() {
    let mut beverages = MockClient::<Beverage>::new();
    let condiments = MockClient::<Condiment>::new();

    beverages
        .expect_action(BeverageId::from("espresso"))
        .return_err(FrameworkError::NotFound("espresso".into()));

    let (order_actor, order_client) = order_actor::new(&VendingConfig::default());
    tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    let result = order_client.place_order(plain("espresso")).await;
    assert_eq!(result, Err(OrderError::InvalidBeverage("espresso".into())));
}

#[tokio::test]
async fn test_status_transitions() {
    let mut beverages = MockClient::<Beverage>::new();
    let condiments = MockClient::<Condiment>::new();
    for _ in 0..2 {
        beverages
            .expect_action(BeverageId::from("cola"))
            .return_ok(quote("Cola", 1200, 140, 1));
    }

    let (order_actor, order_client) = order_actor::new(&VendingConfig::default());
    tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    let first = order_client.place_order(plain("cola")).await.unwrap();
    let processing = order_client
        .advance(first.id, OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(processing.status, OrderStatus::Processing);
    assert!(processing.updated_at >= first.updated_at);

    let completed = order_client
        .advance(first.id, OrderStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    assert_eq!(
        order_client.cancel(first.id).await,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Cancelled,
        })
    );

    let second = order_client.place_order(plain("cola")).await.unwrap();
    assert_eq!(second.id, OrderId(2));
    let cancelled = order_client.cancel(second.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    assert_eq!(
        order_client.advance(OrderId(99), OrderStatus::Processing).await,
        Err(OrderError::NotFound("order_99".into()))
    );
}

#[tokio::test]
async fn test_history_capacity_evicts_oldest() {
    let mut beverages = MockClient::<Beverage>::new();
    let condiments = MockClient::<Condiment>::new();
    for _ in 0..5 {
        beverages
            .expect_action(BeverageId::from("greenTea"))
            .return_ok(quote("Green Tea", 1500, 0, 1));
    }

    let config = VendingConfig {
        history_capacity: 3,
        history_view: 2,
        ..VendingConfig::default()
    };
    let (order_actor, order_client) = order_actor::new(&config);
    tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    for _ in 0..5 {
        order_client.place_order(plain("greenTea")).await.unwrap();
    }

    let kept: Vec<OrderId> = order_client
        .list()
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(kept, vec![OrderId(3), OrderId(4), OrderId(5)]);

    let recent: Vec<OrderId> = order_client
        .recent(config.history_view)
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(recent, vec![OrderId(4), OrderId(5)]);
    assert!(order_client.get(OrderId(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_huge_quantities_saturate_calories() {
    let mut beverages = MockClient::<Beverage>::new();
    let mut condiments = MockClient::<Condiment>::new();

    for _ in 0..2 {
        beverages
            .expect_action(BeverageId::from("mocha"))
            .return_ok(quote("Mocha", 2500, 200, 1));
    }
    for id in ["cream", "caramel"] {
        condiments
            .expect_action(CondimentId::from(id))
            .return_ok(CatalogQuote {
                name: id.to_string(),
                unit_price: Decimal::new(400, 2),
                quantity: 200_000_000,
                line_total: Decimal::new(400, 2) * Decimal::from(200_000_000u32),
                calories: u32::MAX,
            });
    }

    let (order_actor, order_client) = order_actor::new(&VendingConfig::default());
    let handle = tokio::spawn(order_actor.run((
        BeverageClient::new(beverages.client()),
        CondimentClient::new(condiments.client()),
    )));

    let huge = order_client
        .place_order(OrderCreate {
            beverage_id: "mocha".into(),
            condiments: vec![
                CondimentSelection {
                    id: "cream".into(),
                    quantity: 200_000_000,
                },
                CondimentSelection {
                    id: "caramel".into(),
                    quantity: 200_000_000,
                },
            ],
        })
        .await
        .unwrap();
    assert_eq!(huge.total_calories, u32::MAX);
    assert_eq!(huge.total, Decimal::new(2500, 2) + Decimal::from(1_600_000_000u32));

    // The actor is still serving orders.
    let next = order_client.place_order(plain("mocha")).await.unwrap();
    assert_eq!(next.id, OrderId(2));
    assert_eq!(next.total_calories, 200);

    beverages.verify();
    condiments.verify();

    drop(order_client);
    handle.await.unwrap();
}
