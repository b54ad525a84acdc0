//! # Pizzeria
//!
//! > **An in-memory pizza menu and order ledger.**
//!
//! The [`Ledger`](ledger::Ledger) owns the menu, the order queue, the id counters and the
//! register balance. It can be used directly as a plain synchronous struct, or hosted by a
//! single-writer actor and driven through an async [`LedgerClient`](clients::LedgerClient).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Pizza`](model::Pizza), [`Order`](model::Order), their typed ids, and
//! [`PizzaIdentifier`](model::PizzaIdentifier) for lookups by name or id.
//!
//! ### 2. The Ledger ([`ledger`])
//! All operations: `add_pizza`, `place_order`, `complete_order`, `pizza_detail` and the
//! unvalidated `append_raw_*` escape hatch.
//! - **Key items**: [`Ledger`](ledger::Ledger), [`LedgerError`](ledger::LedgerError).
//!
//! ### 3. The Interface ([`clients`])
//! Wraps the generic `StateClient` in a ledger-specific client with one typed method per
//! operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Spins up the ledger actor from a [`PizzeriaConfig`](config::PizzeriaConfig) and shuts
//! it down, handing back the final ledger.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Single Writer
//! The actor applies one request at a time, so "allocate the next id, then append" can
//! never interleave with another writer. Nothing else in the crate is concurrent.
//!
//! ### Errors
//! Lookups that find nothing return `LedgerError::PizzaNotFound` /
//! `LedgerError::OrderNotFound` and leave the ledger untouched. An identifier that is
//! neither a name nor an id is `LedgerError::InvalidArgument`.
//!
//! ### Observability
//! `tracing` everywhere with structured fields. See [`lifecycle`] for setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod ledger;
pub mod lifecycle;
pub mod model;
