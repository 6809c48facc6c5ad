//! # Order Simulator
//!
//! Runs a small in-memory storefront (catalog, directory and order
//! actors) and synthesizes plausible fake orders against it on a
//! randomized schedule.
//!
//! - **[model]**: The storefront data: products, customers, orders.
//! - **[catalog_actor] / [directory_actor] / [order_actor]**: One actor
//!   per resource; the order actor prices lines against the catalog.
//! - **[sim]**: The synthesizer and the timer-driven service around it.
//! - **[lifecycle]**: Wiring and graceful shutdown.
//!
//! Pass a TOML configuration path as the first argument, or rely on the
//! built-in defaults (one order roughly every 48 minutes). Logs are
//! controlled with `RUST_LOG`.

use order_simulator::clients::{CatalogClient, DirectoryClient};
use order_simulator::config::SimulatorConfig;
use order_simulator::identity::IdentityPool;
use order_simulator::lifecycle::StorefrontSystem;
use order_simulator::model::{AccountRole, CustomerCreate, ProductCreate, ProductStatus};
use order_simulator::sim::{SimulatorService, Synthesizer};
use resource_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "order-simulator.toml".to_string());
    let config = SimulatorConfig::load(&config_path).map_err(|e| e.to_string())?;
    info!(path = %config_path, ?config, "Configuration loaded");

    let identities = IdentityPool::bundled().map_err(|e| e.to_string())?;
    info!(identities = identities.len(), "Identity dataset loaded");

    let system = StorefrontSystem::new();

    let span = tracing::info_span!("storefront_seed");
    async { seed_demo_storefront(&system.catalog_client, &system.directory_client).await }
        .instrument(span)
        .await?;

    let synthesizer = Synthesizer::new(
        config.clone(),
        identities,
        system.catalog_client.clone(),
        system.directory_client.clone(),
        system.order_client.clone(),
    );
    let (service, handle) = SimulatorService::new(config, synthesizer);
    let service_task = tokio::spawn(service.run());

    // One order right away, so a fresh start has something to show.
    match handle.trigger_now().await {
        Ok(order_id) => info!(order = %order_id, "Placed an order on demand"),
        Err(e) => error!(error = %e, "On-demand order failed"),
    }

    info!("Synthesizing orders until Ctrl-C");
    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;

    // Stop the simulator first: it holds client clones that would keep
    // the actors alive through shutdown.
    drop(handle);
    service_task
        .await
        .map_err(|e| format!("Simulator task failed: {:?}", e))?;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

/// Seeds a handful of published products and one starter customer, so
/// both customer-reuse and product listing have material to work with.
async fn seed_demo_storefront(
    catalog: &CatalogClient,
    directory: &DirectoryClient,
) -> Result<(), String> {
    let products = [
        ("Walnut Desk Organizer", 39.50),
        ("Ceramic Pour-Over Set", 54.00),
        ("Linen Tea Towels", 18.25),
        ("Brass Bookends", 32.75),
    ];
    for (name, price) in products {
        let id = catalog
            .create_product(ProductCreate {
                name: name.to_string(),
                price,
                status: ProductStatus::Published,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(product = %id, name, "Seeded product");
    }

    let customer_id = directory
        .create_customer(CustomerCreate {
            login: "first_customer".to_string(),
            email: "first.customer@example.com".to_string(),
            first_name: "Frances".to_string(),
            last_name: "Merritt".to_string(),
            password: "demo-only".to_string(),
            role: AccountRole::Customer,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(customer = %customer_id, "Seeded starter customer");

    Ok(())
}
