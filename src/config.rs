//! # Configuration
//!
//! [`PizzeriaConfig`] holds the few knobs the system has: the cash the register opens
//! with, the actor's request buffer, and the menu the ledger is seeded with.
//! [`PizzeriaConfig::default`] is the reference shop: 100 in the register and four pizzas.
//!
//! A JSON document may override any subset of the fields:
//!
//! ```rust
//! use pizzeria::config::PizzeriaConfig;
//!
//! let config = PizzeriaConfig::from_json(r#"{ "opening_balance": 250.0 }"#).unwrap();
//! assert_eq!(config.opening_balance, 250.0);
//! assert_eq!(config.menu.len(), 4);
//! ```

use crate::model::PizzaCreate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default capacity of the ledger actor's request channel.
pub const DEFAULT_BUFFER_SIZE: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(size) => size,
    None => unreachable!(),
};

/// Default cash in the register before the first order.
pub const DEFAULT_OPENING_BALANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PizzeriaConfig {
    pub opening_balance: f64,
    /// A bounded channel needs room for at least one request, so zero is rejected.
    pub buffer_size: NonZeroUsize,
    /// Seeded in order, so the first entry gets pizza id 1.
    pub menu: Vec<PizzaCreate>,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            opening_balance: DEFAULT_OPENING_BALANCE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            menu: vec![
                PizzaCreate::new("Pepperoni", 15.0),
                PizzaCreate::new("Margarita", 10.0),
                PizzaCreate::new("Hawaiian", 20.0),
                PizzaCreate::new("Meat Feast", 25.0),
            ],
        }
    }
}

impl PizzeriaConfig {
    /// Parses a JSON document, falling back to the defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A config with no seeded menu.
    pub fn empty_menu() -> Self {
        Self {
            menu: Vec::new(),
            ..Self::default()
        }
    }
}
