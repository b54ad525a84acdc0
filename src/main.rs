//! # Pizzeria Demo
//!
//! Runs one business day against the default shop:
//! 1.  Opens the [`Pizzeria`] with the four-pizza menu and 100 in the register.
//! 2.  Adds three pizzas to the menu.
//! 3.  Places an order for a Pepperoni and completes it.
//! 4.  Looks up a few pizzas, including one with an identifier of the wrong kind.
//! 5.  Closes the shop and prints the menu, the register balance and the order queue.

use pizzeria::config::PizzeriaConfig;
use pizzeria::lifecycle::{setup_tracing, Pizzeria};
use pizzeria::model::{OrderId, PizzaCreate};
use serde_json::json;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let pizzeria = Pizzeria::new(PizzeriaConfig::default());
    let client = &pizzeria.ledger_client;

    let span = tracing::info_span!("menu_update");
    async {
        for (name, price) in [("Veggie", 18.0), ("BBQ Chicken", 22.0), ("Seafood", 30.0)] {
            client
                .add_pizza(PizzaCreate::new(name, price))
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    async {
        match client.place_order("Pepperoni").await {
            Ok(order) => info!(order_id = %order.id, "Order processed successfully"),
            Err(e) => error!(error = %e, "Order processing failed"),
        }
        if let Err(e) = client.complete_order(OrderId(1)).await {
            error!(error = %e, "Order completion failed");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("lookups");
    async {
        for identifier in [json!("pepperoni"), json!(1), json!(true)] {
            match client.pizza_detail_value(&identifier).await {
                Ok(Some(pizza)) => info!(%identifier, pizza = %pizza.name, "Found pizza"),
                Ok(None) => info!(%identifier, "No such pizza"),
                Err(e) => warn!(%identifier, error = %e, "Lookup rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    let ledger = pizzeria.shutdown().await?;

    let menu = serde_json::to_string_pretty(ledger.menu()).map_err(|e| e.to_string())?;
    let orders = serde_json::to_string_pretty(ledger.orders()).map_err(|e| e.to_string())?;
    println!("Menu: {}", menu);
    println!("Cash in register: {}", ledger.register_balance());
    println!("Order queue: {}", orders);

    Ok(())
}
