//! Pure data structures (DTOs) held by the [`Ledger`](crate::ledger::Ledger).

pub mod order;
pub mod pizza;

pub use order::*;
pub use pizza::*;
