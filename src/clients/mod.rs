//! Typed client wrappers around the generic [`StateClient`](actor_framework::StateClient).

pub mod ledger_client;

pub use ledger_client::LedgerClient;
