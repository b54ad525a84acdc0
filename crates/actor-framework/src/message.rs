//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `StateClient` and `StateActor`.

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// There are only two shapes of request:
///
/// - **Snapshot**: read-only. Returns a clone of the whole state as it is between actions.
/// - **Action**: executes a custom [`ActorState::Action`] against the state.
///
/// The enum is generic over `S: ActorState`, so an action meant for one state type cannot
/// be sent to an actor hosting another.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Snapshot {
        respond_to: Response<S>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}
