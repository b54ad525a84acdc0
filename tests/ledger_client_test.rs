use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use pizzeria::clients::LedgerClient;
use pizzeria::ledger::{Ledger, LedgerActionResult, LedgerError};
use pizzeria::model::{Order, OrderId, OrderStatus, Pizza, PizzaId};

/// Client against a mocked actor: checks that results and errors are passed through
/// in the order the actor answers them.
#[tokio::test]
async fn test_client_with_mocked_ledger() {
    let mut mock = MockClient::<Ledger>::new();

    let pepperoni = Pizza::new(PizzaId(1), "Pepperoni", 15.0);
    let mut completed = Order::new(OrderId(1), pepperoni.clone());
    completed.status = OrderStatus::Completed;

    mock.expect_action()
        .return_ok(LedgerActionResult::PlaceOrder(Order::new(OrderId(1), pepperoni)));
    mock.expect_action()
        .return_ok(LedgerActionResult::CompleteOrder(completed.clone()));
    mock.expect_action().return_err(FrameworkError::StateError(Box::new(
        LedgerError::PizzaNotFound("Calzone".to_string()),
    )));

    let client = LedgerClient::new(mock.client());

    let placed = client.place_order("Pepperoni").await.unwrap();
    assert_eq!(placed.status, OrderStatus::Ordered);

    let done = client.complete_order(placed.id).await.unwrap();
    assert_eq!(done, completed);

    let err = client.place_order("Calzone").await.unwrap_err();
    assert_eq!(err, LedgerError::PizzaNotFound("Calzone".to_string()));

    mock.verify();
}

#[tokio::test]
async fn test_closed_actor_is_communication_error() {
    let (actor, client) = pizzeria::ledger::new(&Default::default());
    drop(actor);

    let err = client.place_order("Pepperoni").await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::ActorCommunicationError("Actor closed".to_string())
    );
}
