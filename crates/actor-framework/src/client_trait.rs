//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific clients, adding a default `snapshot`
//! method built on top of a generic `StateClient`.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorState, FrameworkError, StateClient};
/// use async_trait::async_trait;
///
/// // 1. Define State
/// #[derive(Clone, Debug)]
/// struct Till { cash: u32 }
/// #[derive(Debug)] enum TillAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TillError(String);
///
/// #[async_trait]
/// impl ActorState for Till {
///     type Action = TillAction;
///     type ActionResult = ();
///     type Error = TillError;
///
///     async fn handle_action(&mut self, action: TillAction) -> Result<(), TillError> {
///         match action {}
///     }
/// }
///
/// // 2. Define Client Wrapper
/// struct TillClient {
///     inner: StateClient<Till>,
/// }
///
/// // 3. Implement ActorClient
/// impl ActorClient<Till> for TillClient {
///     type Error = TillError;
///
///     fn inner(&self) -> &StateClient<Till> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TillError(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: TillClient) {
///     // snapshot() is provided automatically!
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the whole state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
