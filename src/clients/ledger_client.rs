//! # Ledger Client
//!
//! Provides a high‑level API for interacting with the ledger actor.
//! It wraps a `StateClient<Ledger>` and exposes one typed method per ledger operation.
use crate::ledger::{Ledger, LedgerAction, LedgerActionResult, LedgerError};
use crate::model::{Order, OrderId, Pizza, PizzaCreate, PizzaIdentifier};
use actor_framework::{ActorClient, FrameworkError, StateClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the ledger actor.
///
/// Errors raised by the ledger come back as the same [`LedgerError`] the synchronous
/// [`Ledger`] would return; transport failures become
/// [`LedgerError::ActorCommunicationError`].
#[derive(Clone)]
pub struct LedgerClient {
    inner: StateClient<Ledger>,
}

#[async_trait]
impl ActorClient<Ledger> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &StateClient<Ledger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_state::<LedgerError>()
            .unwrap_or_else(|e| LedgerError::ActorCommunicationError(e.to_string()))
    }
}

impl LedgerClient {
    pub fn new(inner: StateClient<Ledger>) -> Self {
        Self { inner }
    }

    async fn perform(&self, action: LedgerAction) -> Result<LedgerActionResult, LedgerError> {
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_pizza(&self, params: PizzaCreate) -> Result<Pizza, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::AddPizza(params)).await? {
            LedgerActionResult::AddPizza(pizza) => Ok(pizza),
            _ => unreachable!("AddPizza action must return AddPizza result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, pizza_name: &str) -> Result<Order, LedgerError> {
        debug!("Sending request");
        match self
            .perform(LedgerAction::PlaceOrder(pizza_name.to_string()))
            .await?
        {
            LedgerActionResult::PlaceOrder(order) => Ok(order),
            _ => unreachable!("PlaceOrder action must return PlaceOrder result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, order_id: OrderId) -> Result<Order, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::CompleteOrder(order_id)).await? {
            LedgerActionResult::CompleteOrder(order) => Ok(order),
            _ => unreachable!("CompleteOrder action must return CompleteOrder result"),
        }
    }

    /// Looks up a pizza by name (case-insensitive) or id.
    ///
    /// `Ok(None)` means the lookup ran and found nothing.
    #[instrument(skip(self, identifier))]
    pub async fn pizza_detail(
        &self,
        identifier: impl Into<PizzaIdentifier>,
    ) -> Result<Option<Pizza>, LedgerError> {
        let identifier = identifier.into();
        debug!(%identifier, "Sending request");
        match self.perform(LedgerAction::PizzaDetail(identifier)).await? {
            LedgerActionResult::PizzaDetail(pizza) => Ok(pizza),
            _ => unreachable!("PizzaDetail action must return PizzaDetail result"),
        }
    }

    /// Looks up a pizza from untyped input.
    ///
    /// Invalid identifier kinds are rejected here, before anything reaches the actor. So is
    /// a number that can never be an id, which simply finds nothing.
    #[instrument(skip(self))]
    pub async fn pizza_detail_value(
        &self,
        value: &serde_json::Value,
    ) -> Result<Option<Pizza>, LedgerError> {
        match PizzaIdentifier::from_value(value)? {
            Some(identifier) => self.pizza_detail(identifier).await,
            None => Ok(None),
        }
    }

    /// Pushes a pizza onto the menu without validation. Returns the whole menu.
    #[instrument(skip(self))]
    pub async fn append_raw_pizza(&self, pizza: Pizza) -> Result<Vec<Pizza>, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::AppendRawPizza(pizza)).await? {
            LedgerActionResult::AppendRawPizza(menu) => Ok(menu),
            _ => unreachable!("AppendRawPizza action must return AppendRawPizza result"),
        }
    }

    /// Pushes an order onto the queue without validation. Returns the whole queue.
    #[instrument(skip(self))]
    pub async fn append_raw_order(&self, order: Order) -> Result<Vec<Order>, LedgerError> {
        debug!("Sending request");
        match self.perform(LedgerAction::AppendRawOrder(order)).await? {
            LedgerActionResult::AppendRawOrder(queue) => Ok(queue),
            _ => unreachable!("AppendRawOrder action must return AppendRawOrder result"),
        }
    }
}
