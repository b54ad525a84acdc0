//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the single writer for a hosted state value.
//! It implements the "Server" side of the Actor Model, processing messages sequentially
//! and ensuring exclusive access to the state.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver end
/// of the channel. Requests are handled one at a time in [`run`](StateActor::run), so no
/// `Mutex` or `RwLock` guards the state: a request either completes or fails before the
/// next one is looked at.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the task ends and yields the final state.
///
/// ```rust
/// use actor_framework::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { total: u32 }
///
/// #[derive(Debug)]
/// enum TallyAction { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tally error")]
/// struct TallyError;
///
/// #[async_trait]
/// impl ActorState for Tally {
///     type Action = TallyAction;
///     type ActionResult = u32;
///     type Error = TallyError;
///
///     async fn handle_action(&mut self, action: TallyAction) -> Result<u32, TallyError> {
///         let TallyAction::Add(n) = action;
///         self.total += n;
///         Ok(self.total)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Tally::default(), 10);
///     let handle = tokio::spawn(actor.run());
///
///     assert_eq!(client.perform_action(TallyAction::Add(2)).await.unwrap(), 2);
///
///     drop(client);
///     assert_eq!(handle.await.unwrap().total, 2);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial state. The actor takes ownership of it.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// Returns the final state once every client has been dropped.
    pub async fn run(mut self) -> S {
        // Extract just the type name (e.g., "Ledger" instead of "pizzeria::ledger::Ledger")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    if respond_to.send(Ok(self.state.clone())).is_err() {
                        debug!(state_type, "Caller gone, snapshot dropped");
                    }
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(state_type, "Action ok"),
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    if respond_to.send(result).is_err() {
                        debug!(state_type, "Caller gone, action result dropped");
                    }
                }
            }
        }

        info!(state_type, handled, "Shutdown");
        self.state
    }
}
