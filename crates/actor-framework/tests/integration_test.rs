use actor_framework::{ActorState, FrameworkError, StateActor};
use async_trait::async_trait;

// --- Test State ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Register {
    next_ticket: u32,
    tickets: Vec<u32>,
    cash: u64,
}

#[derive(Debug)]
enum RegisterAction {
    IssueTicket,
    Charge(u64),
}

#[derive(Debug)]
enum RegisterResult {
    IssueTicket(u32),
    Charge(u64),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("refusing to charge zero")]
struct ZeroCharge;

#[async_trait]
impl ActorState for Register {
    type Action = RegisterAction;
    type ActionResult = RegisterResult;
    type Error = ZeroCharge;

    async fn handle_action(
        &mut self,
        action: RegisterAction,
    ) -> Result<RegisterResult, ZeroCharge> {
        match action {
            RegisterAction::IssueTicket => {
                self.next_ticket += 1;
                self.tickets.push(self.next_ticket);
                Ok(RegisterResult::IssueTicket(self.next_ticket))
            }
            RegisterAction::Charge(0) => Err(ZeroCharge),
            RegisterAction::Charge(amount) => {
                self.cash += amount;
                Ok(RegisterResult::Charge(self.cash))
            }
        }
    }
}

#[tokio::test]
async fn test_state_actor_applies_actions_in_order() {
    let (actor, client) = StateActor::new(Register::default(), 10);
    let handle = tokio::spawn(actor.run());

    let first = client.perform_action(RegisterAction::IssueTicket).await.unwrap();
    assert!(matches!(first, RegisterResult::IssueTicket(1)));

    let charged = client.perform_action(RegisterAction::Charge(15)).await.unwrap();
    assert!(matches!(charged, RegisterResult::Charge(15)));

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.tickets, vec![1]);
    assert_eq!(snapshot.cash, 15);

    drop(client);
    let final_state = handle.await.unwrap();
    assert_eq!(final_state, snapshot);
}

#[tokio::test]
async fn test_state_error_is_boxed_and_recoverable() {
    let (actor, client) = StateActor::new(Register::default(), 10);
    let handle = tokio::spawn(actor.run());

    let err = client
        .perform_action(RegisterAction::Charge(0))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "State error: refusing to charge zero");
    assert_eq!(err.downcast_state::<ZeroCharge>().unwrap(), ZeroCharge);

    // A failed action leaves the state alone
    assert_eq!(client.snapshot().await.unwrap(), Register::default());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_never_share_a_ticket() {
    let (actor, client) = StateActor::new(Register::default(), 4);
    let handle = tokio::spawn(actor.run());

    let mut tasks = vec![];
    for _ in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.perform_action(RegisterAction::IssueTicket).await
        }));
    }

    let mut issued = vec![];
    for task in tasks {
        match task.await.unwrap().unwrap() {
            RegisterResult::IssueTicket(ticket) => issued.push(ticket),
            other => panic!("unexpected result: {:?}", other),
        }
    }
    issued.sort_unstable();
    assert_eq!(issued, (1..=20).collect::<Vec<_>>());

    drop(client);
    let final_state = handle.await.unwrap();
    assert_eq!(final_state.tickets.len(), 20);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = StateActor::new(Register::default(), 1);
    drop(actor);

    let result = client.snapshot().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_actor_survives_caller_that_stopped_waiting() {
    let (actor, client) = StateActor::new(Register::default(), 10);

    // The request is queued before the caller gives up on the reply
    let abandoned = tokio::time::timeout(
        std::time::Duration::ZERO,
        client.perform_action(RegisterAction::IssueTicket),
    )
    .await;
    assert!(abandoned.is_err());

    let handle = tokio::spawn(actor.run());

    let next = client.perform_action(RegisterAction::IssueTicket).await.unwrap();
    assert!(matches!(next, RegisterResult::IssueTicket(2)));

    drop(client);
    let final_state = handle.await.unwrap();
    assert_eq!(final_state.tickets, vec![1, 2]);
}
