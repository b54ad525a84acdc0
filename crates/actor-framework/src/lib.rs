//! # Actor Framework
//!
//! A small single-writer actor for hosting one piece of in-memory state behind an
//! async, cloneable client.
//!
//! ## Why an actor?
//!
//! Some state has invariants that span several fields: "bump the counter, then append the
//! record" must never interleave with another writer. Instead of wrapping the state in a
//! lock and trusting every caller to hold it correctly, the state is moved into one Tokio
//! task that applies requests strictly one at a time. Callers talk to it through a client
//! that only sends messages.
//!
//! ## Layers
//!
//! 1. **State Layer** ([`ActorState`]) - your business logic, written as plain methods
//! 2. **Runtime Layer** ([`StateActor`]) - message processing and exclusive ownership
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Lifecycle
//!
//! ```rust
//! use actor_framework::{ActorState, StateActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter { value: u64 }
//!
//! #[derive(Debug)]
//! enum CounterAction { Increment }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorState for Counter {
//!     type Action = CounterAction;
//!     type ActionResult = u64;
//!     type Error = CounterError;
//!
//!     async fn handle_action(&mut self, _: CounterAction) -> Result<u64, CounterError> {
//!         self.value += 1;
//!         Ok(self.value)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StateActor::new(Counter::default(), 8);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.perform_action(CounterAction::Increment).await.unwrap();
//!     assert_eq!(client.snapshot().await.unwrap().value, 1);
//!
//!     // Dropping the last client stops the actor and hands back the state.
//!     drop(client);
//!     assert_eq!(handle.await.unwrap().value, 1);
//! }
//! ```
//!
//! ## Errors
//!
//! Transport failures surface as [`FrameworkError::ActorClosed`] or
//! [`FrameworkError::ActorDropped`]. Errors returned by the state are boxed into
//! [`FrameworkError::StateError`]; [`FrameworkError::downcast_state`] recovers them.
//!
//! ## Testing
//!
//! The [`mock`] module stands in for a running actor so domain clients can be tested alone.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
