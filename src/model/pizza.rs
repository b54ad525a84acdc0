//! Represents a pizza on the menu.
//!
//! Pizzas are created through [`Ledger::add_pizza`](crate::ledger::Ledger::add_pizza),
//! which assigns the id, and are never changed afterwards.
//!
//! See [`PizzaIdentifier`] for the two ways a pizza can be looked up.
use crate::ledger::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Pizzas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PizzaId(pub u32);

impl From<u32> for PizzaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pizza_{}", self.0)
    }
}

/// Where a record came from.
///
/// Records built by the ledger's own constructors are `Allocated`: their id came from the
/// ledger's counter. Records pushed through the raw-append path are `Raw` and carry
/// whatever id the caller chose, possibly a duplicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    #[default]
    Allocated,
    Raw,
}

impl Provenance {
    pub fn is_allocated(&self) -> bool {
        matches!(self, Provenance::Allocated)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Provenance::is_allocated")]
    pub provenance: Provenance,
}

impl Pizza {
    /// Creates a new Pizza instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the ledger)
    /// * `name` - Display name, also used for order lookups
    /// * `price` - Price charged to the register per order
    pub fn new(id: PizzaId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            provenance: Provenance::Allocated,
        }
    }
}

/// Payload for adding a pizza: everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaCreate {
    pub name: String,
    pub price: f64,
}

impl PizzaCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Key for [`Ledger::pizza_detail`](crate::ledger::Ledger::pizza_detail).
///
/// Names are matched case-insensitively, ids exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PizzaIdentifier {
    Name(String),
    Id(PizzaId),
}

impl From<&str> for PizzaIdentifier {
    fn from(name: &str) -> Self {
        PizzaIdentifier::Name(name.to_string())
    }
}

impl From<String> for PizzaIdentifier {
    fn from(name: String) -> Self {
        PizzaIdentifier::Name(name)
    }
}

impl From<PizzaId> for PizzaIdentifier {
    fn from(id: PizzaId) -> Self {
        PizzaIdentifier::Id(id)
    }
}

impl From<u32> for PizzaIdentifier {
    fn from(id: u32) -> Self {
        PizzaIdentifier::Id(PizzaId(id))
    }
}

impl PizzaIdentifier {
    /// Reads an identifier from untyped input (e.g. a JSON request body).
    ///
    /// A string is a name. A number is an id when it is a whole number in `u32` range;
    /// any other number can never match a pizza and yields `Ok(None)`. Every other kind
    /// of value is [`LedgerError::InvalidArgument`].
    pub fn from_value(value: &serde_json::Value) -> Result<Option<Self>, LedgerError> {
        match value {
            serde_json::Value::String(name) => Ok(Some(PizzaIdentifier::Name(name.clone()))),
            serde_json::Value::Number(number) => Ok(number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX))
                .map(|n| PizzaIdentifier::Id(PizzaId(n as u32)))),
            other => Err(LedgerError::InvalidArgument(format!(
                "pizza identifier must be a string or a number, got {}",
                other
            ))),
        }
    }
}

impl Display for PizzaIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PizzaIdentifier::Name(name) => write!(f, "{:?}", name),
            PizzaIdentifier::Id(id) => write!(f, "{}", id),
        }
    }
}
