//! Represents a customer order for one pizza.
//!
//! The order keeps its own copy of the pizza as it was when the order was placed.
use crate::model::{Pizza, Provenance};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Order status. The only transition is `Ordered -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Ordered,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub pizza: Pizza,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Provenance::is_allocated")]
    pub provenance: Provenance,
}

impl Order {
    /// Creates a new Order instance with status `Ordered`.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the ledger)
    /// * `pizza` - Copy of the ordered pizza
    pub fn new(id: OrderId, pizza: Pizza) -> Self {
        Self {
            id,
            pizza,
            status: OrderStatus::Ordered,
            provenance: Provenance::Allocated,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
