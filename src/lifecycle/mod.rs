//! # System Lifecycle
//!
//! Starts and stops the ledger actor.
//!
//! ## The Pizzeria Pattern
//!
//! [`Pizzeria`] owns the ledger actor's task handle and hands out a cloneable
//! [`LedgerClient`](crate::clients::LedgerClient). There is exactly one actor, so there
//! is no wiring between actors to speak of; the interesting part is shutdown:
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor drains** - queued requests are still answered, then `recv()` returns `None`
//! 3. **State comes back** - the task's output is the final [`Ledger`](crate::ledger::Ledger)
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes the subscriber; control verbosity with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Operations and lifecycle
//! RUST_LOG=debug cargo run     # Full request payloads
//! ```

pub mod pizzeria;

pub use actor_framework::tracing::setup_tracing;
pub use pizzeria::*;
