//! # ActorState Trait
//!
//! The `ActorState` trait is the contract a state container (a ledger, a catalog, a
//! register...) implements to be hosted by the generic [`StateActor`](crate::StateActor).
//! The actor owns exactly one value of the state type and feeds it one action at a time,
//! so every action runs against the state with exclusive access.
//!
//! # Associated Types
//!
//! - `Action` - the enum of operations the state understands.
//! - `ActionResult` - the enum of results, typically one variant per action.
//! - `Error` - the state's own error type, boxed into
//!   [`FrameworkError::StateError`](crate::FrameworkError::StateError) on the way out.
//!
//! # Design Note: One Error Type
//!
//! The framework enforces a single error enum per state rather than one per action.
//! Clients then deal with one error type and can pattern match on it directly,
//! at the cost of every action technically being able to return every error variant.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any state container must implement to be hosted by a `StateActor`.
///
/// The bound on `Clone` exists so the actor can answer
/// [`StateRequest::Snapshot`](crate::StateRequest::Snapshot) with a copy of the whole state.
#[async_trait]
pub trait ActorState: Clone + Debug + Send + Sync + 'static {
    /// Enum representing the operations this state supports (e.g., `PlaceOrder`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this state.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply one action to the state.
    ///
    /// A failed action must leave the state untouched; the actor does not roll back.
    async fn handle_action(
        &mut self,
        action: Self::Action,
    ) -> Result<Self::ActionResult, Self::Error>;
}
