//! # Mocking Utilities
//!
//! Domain clients (e.g. a `LedgerClient`) are thin wrappers that translate typed method calls
//! into [`StateRequest`]s. Testing them against a live actor would also test the state, so
//! this module offers two ways to stand in for the actor:
//!
//! 1. **Low level**: [`create_mock_client`] returns a client plus the receiver end of its
//!    channel. The test pulls requests off the receiver with [`expect_action`] or
//!    [`expect_snapshot`], asserts on them and answers through the responder.
//! 2. **Fluent**: [`MockClient`] queues canned responses up front and answers requests in
//!    order from a background task. Call [`MockClient::verify`] at the end to make sure
//!    every expectation was consumed.
//!
//! ```ignore
//! let mut mock = MockClient::<Ledger>::new();
//! mock.expect_action().return_ok(LedgerActionResult::PlaceOrder(order));
//!
//! let client = LedgerClient::new(mock.client());
//! client.place_order("Pepperoni").await?;
//! mock.verify();
//! ```

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<S: ActorState> {
    Snapshot {
        response: Result<S, FrameworkError>,
    },
    Action {
        response: Result<S::ActionResult, FrameworkError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations strictly in the order they were queued.
/// A request of the wrong kind, or one arriving after the queue ran dry, panics the
/// background task, which surfaces in the test as `FrameworkError::ActorDropped`.
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Action {
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<S> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: ActorState> {
    expectations: Expectations<S>,
}

impl<S: ActorState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return the given state.
    pub fn return_ok(self, state: S) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(state) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<S: ActorState> {
    expectations: Expectations<S>,
}

impl<S: ActorState> ActionExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends messages to a channel the test controls (`receiver`). The test inspects
/// each message as it arrives and decides how the "actor" answers, which makes success,
/// failure and dropped responses equally easy to simulate.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
