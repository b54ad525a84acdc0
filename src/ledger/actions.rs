//! Actions for the ledger actor.
//!
//! Each variant of [`LedgerAction`] maps to one [`Ledger`](crate::ledger::Ledger) operation,
//! and [`LedgerActionResult`] carries the matching return value back to the client.

use crate::model::{Order, OrderId, Pizza, PizzaCreate, PizzaIdentifier};

/// Operations the ledger actor performs on behalf of clients.
#[derive(Debug, Clone)]
pub enum LedgerAction {
    /// Adds a pizza to the menu with the next pizza id.
    AddPizza(PizzaCreate),
    /// Places an order for the pizza with this exact name.
    PlaceOrder(String),
    /// Marks an order as completed.
    CompleteOrder(OrderId),
    /// Looks up a pizza by name (case-insensitive) or id.
    PizzaDetail(PizzaIdentifier),
    /// Pushes a pizza onto the menu without validation.
    AppendRawPizza(Pizza),
    /// Pushes an order onto the queue without validation.
    AppendRawOrder(Order),
}

/// Results from LedgerActions - variants match 1:1 with LedgerAction
#[derive(Debug, Clone)]
pub enum LedgerActionResult {
    AddPizza(Pizza),
    PlaceOrder(Order),
    CompleteOrder(Order),
    PizzaDetail(Option<Pizza>),
    /// The whole menu after the push
    AppendRawPizza(Vec<Pizza>),
    /// The whole order queue after the push
    AppendRawOrder(Vec<Order>),
}
