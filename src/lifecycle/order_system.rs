use tracing::{error, info};

use crate::clients::{OrderClient, ProductClient};

/// The main runtime orchestrator for the storefront's actor system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle management**: starting and stopping all actors
/// - **Dependency wiring**: the Order actor needs the Product client to
///   reserve and release stock
///
/// # Architecture
///
/// Two actors:
/// - **Product actor**: catalog entries with stock tracking
/// - **Order actor**: orders, the confirmation workflow, and totals
///   reconciliation/repair
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let product_id = system.product_client.create_product(params).await?;
/// let order_id = system.order_client.create_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with all actors
    /// running.
    ///
    /// The Product actor has no dependencies; the Order actor receives a
    /// `ProductClient` as its injected context. Passing the storage
    /// handles around explicitly (rather than through process-wide
    /// singletons) is what lets the tests drive the order actor against a
    /// mocked catalog.
    pub fn new() -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        Self {
            order_client,
            product_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its loop. Any panicked actor task is
    /// reported as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
