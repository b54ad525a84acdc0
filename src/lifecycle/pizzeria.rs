use crate::clients::LedgerClient;
use crate::config::PizzeriaConfig;
use crate::ledger::Ledger;
use tracing::{error, info};

/// The runtime orchestrator for the pizzeria.
///
/// `Pizzeria` is responsible for:
/// - **Lifecycle Management**: Starting the ledger actor and stopping it again
/// - **Seeding**: Building the initial [`Ledger`] from a [`PizzeriaConfig`]
///
/// # Example
///
/// ```ignore
/// let pizzeria = Pizzeria::new(PizzeriaConfig::default());
///
/// let order = pizzeria.ledger_client.place_order("Pepperoni").await?;
/// pizzeria.ledger_client.complete_order(order.id).await?;
///
/// // Gracefully shut down and keep the final state
/// let ledger = pizzeria.shutdown().await?;
/// ```
pub struct Pizzeria {
    /// Client for interacting with the ledger actor
    pub ledger_client: LedgerClient,

    /// Task handle of the ledger actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<Ledger>,
}

impl Pizzeria {
    /// Creates the ledger from `config` and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: PizzeriaConfig) -> Self {
        let (ledger_actor, ledger_client) = crate::ledger::new(&config);
        let handle = tokio::spawn(ledger_actor.run());

        info!(
            opening_balance = config.opening_balance,
            menu_size = config.menu.len(),
            "Pizzeria open"
        );

        Self {
            ledger_client,
            handle,
        }
    }

    /// Gracefully shuts down the ledger actor and returns the final ledger.
    ///
    /// Dropping the client closes the channel; the actor finishes any queued requests and
    /// exits its loop. Clones of the client handed out earlier keep the actor alive until
    /// they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(Ledger)` with the final state if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<Ledger, String> {
        info!("Shutting down pizzeria...");

        drop(self.ledger_client);

        match self.handle.await {
            Ok(ledger) => {
                info!(
                    register_balance = ledger.register_balance(),
                    orders = ledger.orders().len(),
                    "Pizzeria closed"
                );
                Ok(ledger)
            }
            Err(e) => {
                error!("Ledger actor failed: {:?}", e);
                Err(format!("Ledger actor failed: {:?}", e))
            }
        }
    }
}
