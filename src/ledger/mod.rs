//! # Ledger
//!
//! The catalog and order ledger: the pizza menu, the order queue, the id counters and
//! the register balance, all owned by one [`Ledger`] value.
//!
//! ## Structure
//!
//! - [`Ledger`] - the state and its synchronous operations
//! - [`error`] - [`LedgerError`] type for type-safe error handling
//! - [`actions`] - [`LedgerAction`] and [`LedgerActionResult`] for the actor boundary
//! - [`state`] - [`ActorState`](actor_framework::ActorState) implementation for [`Ledger`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Lookup Rules
//!
//! Lookups scan in insertion order and take the first match.
//! [`Ledger::place_order`] compares names exactly, while [`Ledger::pizza_detail`] ignores
//! case. The two rules differ on purpose and callers rely on both.
//!
//! ## Usage
//!
//! ```rust
//! use pizzeria::config::PizzeriaConfig;
//! use pizzeria::ledger::Ledger;
//! use pizzeria::model::{OrderId, OrderStatus};
//!
//! let mut ledger = Ledger::from_config(&PizzeriaConfig::default());
//!
//! let order = ledger.place_order("Pepperoni").unwrap();
//! assert_eq!(order.status, OrderStatus::Ordered);
//!
//! ledger.complete_order(OrderId(1)).unwrap();
//! assert_eq!(ledger.register_balance(), 115.0);
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;

use crate::clients::LedgerClient;
use crate::config::PizzeriaConfig;
use crate::model::{
    Order, OrderId, OrderStatus, Pizza, PizzaCreate, PizzaId, PizzaIdentifier, Provenance,
};
use actor_framework::StateActor;
use tracing::{debug, info, warn};

/// Creates a new ledger actor, seeded from `config`, and its client.
pub fn new(config: &PizzeriaConfig) -> (StateActor<Ledger>, LedgerClient) {
    let ledger = Ledger::from_config(config);
    let (actor, generic_client) = StateActor::new(ledger, config.buffer_size.get());
    (actor, LedgerClient::new(generic_client))
}

/// Pushes `item` onto `items` and hands back the whole sequence.
///
/// No validation of any kind happens here.
pub fn push_and_return<T>(items: &mut Vec<T>, item: T) -> &[T] {
    items.push(item);
    items
}

/// Menu, order queue, id counters and register balance.
#[derive(Debug, Clone)]
pub struct Ledger {
    menu: Vec<Pizza>,
    orders: Vec<Order>,
    next_pizza_id: u32,
    next_order_id: u32,
    register_balance: f64,
}

impl Ledger {
    /// An empty ledger with `opening_balance` in the register.
    pub fn new(opening_balance: f64) -> Self {
        Self {
            menu: Vec::new(),
            orders: Vec::new(),
            next_pizza_id: 1,
            next_order_id: 1,
            register_balance: opening_balance,
        }
    }

    /// A ledger with the configured opening balance and the configured menu added in order.
    pub fn from_config(config: &PizzeriaConfig) -> Self {
        let mut ledger = Self::new(config.opening_balance);
        for params in &config.menu {
            ledger.add_pizza(params.clone());
        }
        ledger
    }

    pub fn menu(&self) -> &[Pizza] {
        &self.menu
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn register_balance(&self) -> f64 {
        self.register_balance
    }

    pub fn latest_pizza(&self) -> Option<&Pizza> {
        self.menu.last()
    }

    pub fn latest_order(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Adds a pizza with the next pizza id and returns it.
    pub fn add_pizza(&mut self, params: PizzaCreate) -> Pizza {
        let pizza = Pizza::new(PizzaId(self.next_pizza_id), params.name, params.price);
        self.next_pizza_id += 1;
        self.menu.push(pizza.clone());
        info!(pizza_id = %pizza.id, name = %pizza.name, price = pizza.price, "Pizza added");
        pizza
    }

    /// Places an order for the first pizza named exactly `pizza_name`.
    ///
    /// On success the pizza's price goes into the register and the order joins the queue
    /// as `Ordered`. When no pizza matches, nothing changes.
    pub fn place_order(&mut self, pizza_name: &str) -> Result<Order, LedgerError> {
        let Some(pizza) = self.menu.iter().find(|p| p.name == pizza_name).cloned() else {
            let err = LedgerError::PizzaNotFound(pizza_name.to_string());
            warn!(pizza_name, "{}", err);
            return Err(err);
        };

        self.register_balance += pizza.price;
        let order = Order::new(OrderId(self.next_order_id), pizza);
        self.next_order_id += 1;
        self.orders.push(order.clone());
        info!(
            order_id = %order.id,
            pizza = %order.pizza.name,
            register_balance = self.register_balance,
            "Order placed"
        );
        Ok(order)
    }

    /// Marks the first order with `order_id` as completed and returns it.
    ///
    /// Completing an order twice is not an error; it stays `Completed`.
    pub fn complete_order(&mut self, order_id: OrderId) -> Result<Order, LedgerError> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            let err = LedgerError::OrderNotFound(order_id);
            warn!(%order_id, "{}", err);
            return Err(err);
        };

        if order.is_completed() {
            debug!(%order_id, "Order already completed");
        }
        order.status = OrderStatus::Completed;
        info!(%order_id, "Order completed");
        Ok(order.clone())
    }

    /// Finds the first pizza matching `identifier`: names case-insensitively, ids exactly.
    pub fn pizza_detail(&self, identifier: &PizzaIdentifier) -> Option<&Pizza> {
        let found = match identifier {
            PizzaIdentifier::Name(name) => {
                let wanted = name.to_lowercase();
                self.menu.iter().find(|p| p.name.to_lowercase() == wanted)
            }
            PizzaIdentifier::Id(id) => self.menu.iter().find(|p| p.id == *id),
        };
        debug!(%identifier, found = found.is_some(), "Pizza detail");
        found
    }

    /// Like [`pizza_detail`](Self::pizza_detail) for untyped input.
    ///
    /// Anything but a string or a number is rejected before the menu is searched. A number
    /// that is not a whole `u32` finds nothing.
    pub fn pizza_detail_value(
        &self,
        value: &serde_json::Value,
    ) -> Result<Option<&Pizza>, LedgerError> {
        match PizzaIdentifier::from_value(value)? {
            Some(identifier) => Ok(self.pizza_detail(&identifier)),
            None => {
                debug!(%value, "Number can never be a pizza id");
                Ok(None)
            }
        }
    }

    /// Pushes `pizza` onto the menu as-is, marked [`Provenance::Raw`].
    ///
    /// The pizza counter is not touched, so the id may duplicate an existing one or one
    /// that `add_pizza` will hand out later.
    pub fn append_raw_pizza(&mut self, mut pizza: Pizza) -> &[Pizza] {
        pizza.provenance = Provenance::Raw;
        if pizza.id.0 >= self.next_pizza_id || self.menu.iter().any(|p| p.id == pizza.id) {
            warn!(
                pizza_id = %pizza.id,
                next_pizza_id = self.next_pizza_id,
                "Raw pizza id may collide"
            );
        }
        push_and_return(&mut self.menu, pizza)
    }

    /// Pushes `order` onto the queue as-is, marked [`Provenance::Raw`].
    ///
    /// Neither the order counter nor the register balance is touched.
    pub fn append_raw_order(&mut self, mut order: Order) -> &[Order] {
        order.provenance = Provenance::Raw;
        if order.id.0 >= self.next_order_id || self.orders.iter().any(|o| o.id == order.id) {
            warn!(
                order_id = %order.id,
                next_order_id = self.next_order_id,
                "Raw order id may collide"
            );
        }
        push_and_return(&mut self.orders, order)
    }
}
