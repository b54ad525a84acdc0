use actor_framework::ActorClient;
use pizzeria::config::PizzeriaConfig;
use pizzeria::ledger::LedgerError;
use pizzeria::lifecycle::Pizzeria;
use pizzeria::model::{Order, OrderId, OrderStatus, Pizza, PizzaCreate, PizzaId, Provenance};

/// Full end-to-end run of the reference scenario through the real actor.
#[tokio::test]
async fn test_reference_day_through_actor() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::default());
    let client = pizzeria.ledger_client.clone();

    // Seeded menu: ids 1-4, prices 15/10/20/25
    let opening = client.snapshot().await.expect("Failed to snapshot");
    let seeded: Vec<_> = opening
        .menu()
        .iter()
        .map(|p| (p.id.0, p.price))
        .collect();
    assert_eq!(seeded, [(1, 15.0), (2, 10.0), (3, 20.0), (4, 25.0)]);
    assert_eq!(opening.register_balance(), 100.0);

    // Place and complete an order
    let order = client
        .place_order("Pepperoni")
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.status, OrderStatus::Ordered);

    let completed = client
        .complete_order(OrderId(1))
        .await
        .expect("Failed to complete order");
    assert_eq!(completed.status, OrderStatus::Completed);

    // Completing again is harmless
    let again = client
        .complete_order(OrderId(1))
        .await
        .expect("Second completion should succeed");
    assert_eq!(again.status, OrderStatus::Completed);

    drop(client);
    let ledger = pizzeria.shutdown().await.expect("Failed to shutdown");
    assert_eq!(ledger.register_balance(), 115.0);
    assert_eq!(ledger.orders().len(), 1);
    assert_eq!(ledger.orders()[0].id, OrderId(1));
    assert_eq!(ledger.orders()[0].status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_not_found_leaves_state_unchanged() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::default());
    let client = &pizzeria.ledger_client;

    let before = client.snapshot().await.unwrap();

    let err = client.place_order("Nonexistent").await.unwrap_err();
    assert_eq!(err, LedgerError::PizzaNotFound("Nonexistent".to_string()));

    let err = client.complete_order(OrderId(7)).await.unwrap_err();
    assert_eq!(err, LedgerError::OrderNotFound(OrderId(7)));

    let after = client.snapshot().await.unwrap();
    assert_eq!(after.menu(), before.menu());
    assert_eq!(after.orders(), before.orders());
    assert_eq!(after.register_balance(), before.register_balance());

    pizzeria.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_added_pizzas_are_orderable_and_findable() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::default());
    let client = &pizzeria.ledger_client;

    let veggie = client
        .add_pizza(PizzaCreate::new("Veggie", 18.0))
        .await
        .unwrap();
    assert_eq!(veggie.id, PizzaId(5));

    let by_name = client.pizza_detail("VEGGIE").await.unwrap();
    let by_id = client.pizza_detail(PizzaId(5)).await.unwrap();
    assert_eq!(by_name, Some(veggie.clone()));
    assert_eq!(by_id, Some(veggie));

    // Ordering is case-sensitive even though lookups are not
    assert!(client.place_order("veggie").await.is_err());
    let order = client.place_order("Veggie").await.unwrap();
    assert_eq!(order.pizza.price, 18.0);

    let ledger = pizzeria.shutdown().await.unwrap();
    assert_eq!(ledger.register_balance(), 118.0);
}

#[tokio::test]
async fn test_raw_appends_are_marked() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::default());
    let client = &pizzeria.ledger_client;

    let menu = client
        .append_raw_pizza(Pizza::new(PizzaId(5), "Veggie", 18.0))
        .await
        .unwrap();
    assert_eq!(menu.len(), 5);
    assert_eq!(menu[4].provenance, Provenance::Raw);

    let hawaiian = client.pizza_detail(PizzaId(3)).await.unwrap().unwrap();
    let mut raw_order = Order::new(OrderId(1), hawaiian);
    raw_order.status = OrderStatus::Completed;
    let queue = client.append_raw_order(raw_order).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].provenance, Provenance::Raw);

    let ledger = pizzeria.shutdown().await.unwrap();
    assert_eq!(ledger.register_balance(), 100.0);
}

/// Many clients placing orders at once still get distinct, gap-free order ids.
#[tokio::test]
async fn test_concurrent_orders_get_unique_ids() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::default());

    let mut handles = vec![];
    for _ in 0..10 {
        let client = pizzeria.ledger_client.clone();
        handles.push(tokio::spawn(async move { client.place_order("Margarita").await }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().expect("Order should succeed").id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());

    let ledger = pizzeria.shutdown().await.unwrap();
    assert_eq!(ledger.register_balance(), 200.0);
    assert_eq!(ledger.orders().len(), 10);
}

#[tokio::test]
async fn test_empty_menu_config() {
    let pizzeria = Pizzeria::new(PizzeriaConfig::empty_menu());

    let err = pizzeria.ledger_client.place_order("Pepperoni").await.unwrap_err();
    assert!(err.is_not_found());

    let ledger = pizzeria.shutdown().await.unwrap();
    assert!(ledger.menu().is_empty());
    assert_eq!(ledger.register_balance(), 100.0);
}
