//! Error types for the ledger.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// No menu entry carries this exact name.
    #[error("{0} does not exist in the menu")]
    PizzaNotFound(String),

    /// No order in the queue carries this id.
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// A pizza identifier was neither a name nor an id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl LedgerError {
    /// True for the two "no such record" outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::PizzaNotFound(_) | LedgerError::OrderNotFound(_)
        )
    }
}
