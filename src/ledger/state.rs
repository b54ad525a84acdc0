//! ActorState trait implementation for the [`Ledger`].
//!
//! Each [`LedgerAction`] is forwarded to the matching synchronous ledger method; the actor
//! around it guarantees no two actions ever overlap.

use super::actions::{LedgerAction, LedgerActionResult};
use super::{Ledger, LedgerError};
use actor_framework::ActorState;
use async_trait::async_trait;

#[async_trait]
impl ActorState for Ledger {
    type Action = LedgerAction;
    type ActionResult = LedgerActionResult;
    type Error = LedgerError;

    /// Handles ledger actions.
    ///
    /// # Actions
    /// - `AddPizza`: Always succeeds, returns the new pizza
    /// - `PlaceOrder`: Fails with `PizzaNotFound` when no name matches exactly
    /// - `CompleteOrder`: Fails with `OrderNotFound` for an unknown id
    /// - `PizzaDetail`: Never fails, the pizza may be absent
    /// - `AppendRawPizza` / `AppendRawOrder`: Never fail, return the whole sequence
    async fn handle_action(
        &mut self,
        action: LedgerAction,
    ) -> Result<LedgerActionResult, LedgerError> {
        match action {
            LedgerAction::AddPizza(params) => {
                Ok(LedgerActionResult::AddPizza(self.add_pizza(params)))
            }
            LedgerAction::PlaceOrder(pizza_name) => self
                .place_order(&pizza_name)
                .map(LedgerActionResult::PlaceOrder),
            LedgerAction::CompleteOrder(order_id) => self
                .complete_order(order_id)
                .map(LedgerActionResult::CompleteOrder),
            LedgerAction::PizzaDetail(identifier) => Ok(LedgerActionResult::PizzaDetail(
                self.pizza_detail(&identifier).cloned(),
            )),
            LedgerAction::AppendRawPizza(pizza) => Ok(LedgerActionResult::AppendRawPizza(
                self.append_raw_pizza(pizza).to_vec(),
            )),
            LedgerAction::AppendRawOrder(order) => Ok(LedgerActionResult::AppendRawOrder(
                self.append_raw_order(order).to_vec(),
            )),
        }
    }
}
