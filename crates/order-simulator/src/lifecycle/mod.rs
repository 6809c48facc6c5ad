//! # System Lifecycle
//!
//! Wires the storefront actors together and manages their lifetime.
//!
//! Actors are created without dependencies and receive them when started
//! through `run(context)`; here that means the order actor gets a catalog
//! client for pricing line items. Shutdown is cooperative: dropping the
//! clients closes the request channels, each actor drains its queue and
//! exits, and [`StorefrontSystem::shutdown`] waits for them all. The
//! dependency graph is acyclic, so the catalog actor's channel closes
//! once the order actor (which holds a client clone in its context) has
//! exited.

use crate::catalog_actor;
use crate::clients::{CatalogClient, DirectoryClient, OrderClient};
use crate::directory_actor;
use crate::order_actor;
use tracing::{error, info};

/// The running storefront: three actors and their clients.
pub struct StorefrontSystem {
    pub catalog_client: CatalogClient,
    pub directory_client: DirectoryClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Creates the actors, injects dependencies and starts them.
    pub fn new() -> Self {
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let (directory_actor, directory_client) = directory_actor::new();
        let (order_actor, order_client) = order_actor::new();

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let directory_handle = tokio::spawn(directory_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(catalog_client.clone()));

        info!("Storefront actors started");

        Self {
            catalog_client,
            directory_client,
            order_client,
            handles: vec![catalog_handle, directory_handle, order_handle],
        }
    }

    /// Stops every actor and waits for them to finish.
    ///
    /// Anything still holding a client clone (a running simulator
    /// service, for instance) keeps the corresponding actor alive; stop
    /// those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront actors");

        drop(self.order_client);
        drop(self.directory_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
