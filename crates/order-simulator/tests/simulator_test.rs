//! End-to-end tests driving the whole system: real actors, real service,
//! seeded randomness where determinism matters.

use order_simulator::config::{SimulatorConfig, StatusWeights};
use order_simulator::identity::IdentityPool;
use order_simulator::lifecycle::StorefrontSystem;
use order_simulator::model::{
    AccountRole, ContactProfile, CustomerCreate, CustomerId, OrderId, OrderStatus, ProductCreate,
    ProductId, ProductStatus, PAYMENT_METHOD, PAYMENT_METHOD_TITLE,
};
use order_simulator::sim::{SimulatorService, Synthesizer, TriggerError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resource_actor::ActorClient;
use std::time::Duration;

/// Configuration for tests that drive synthesis by hand: the timer is
/// off, customer creation is off, and every order completes.
fn manual_config() -> SimulatorConfig {
    SimulatorConfig {
        orders_per_period: 0,
        create_users: false,
        status_weights: StatusWeights {
            completed_pct: 100,
            processing_pct: 0,
            failed_pct: 0,
        },
        ..SimulatorConfig::default()
    }
}

fn synthesizer_for(system: &StorefrontSystem, config: SimulatorConfig) -> Synthesizer {
    // Customer creation stays disabled in these tests, so an empty
    // identity pool doubles as proof the pool is never consulted.
    Synthesizer::new(
        config,
        IdentityPool::from_records(vec![]),
        system.catalog_client.clone(),
        system.directory_client.clone(),
        system.order_client.clone(),
    )
}

async fn seed_products(system: &StorefrontSystem, prices: &[f64]) -> Vec<ProductId> {
    let mut ids = Vec::new();
    for (index, price) in prices.iter().enumerate() {
        let id = system
            .catalog_client
            .create_product(ProductCreate {
                name: format!("Test Product {}", index + 1),
                price: *price,
                status: ProductStatus::Published,
            })
            .await
            .expect("product creation failed");
        ids.push(id);
    }
    ids
}

async fn seed_account(system: &StorefrontSystem, login: &str, role: AccountRole) -> CustomerId {
    system
        .directory_client
        .create_customer(CustomerCreate {
            login: login.to_string(),
            email: format!("{login}@example.com"),
            first_name: "Test".to_string(),
            last_name: "Account".to_string(),
            password: "not-a-secret".to_string(),
            role,
        })
        .await
        .expect("account creation failed")
}

#[tokio::test]
async fn manual_trigger_synthesizes_a_complete_order() {
    let system = StorefrontSystem::new();
    seed_products(&system, &[12.50, 30.00, 7.99]).await;
    let customer_id = seed_account(&system, "regular_shopper", AccountRole::Customer).await;

    let profile = ContactProfile {
        first_name: "Rosa".to_string(),
        last_name: "Ibarra".to_string(),
        address_1: "77 Canal Street".to_string(),
        city: "Galveston".to_string(),
        state: "TX".to_string(),
        postcode: "77550".to_string(),
        country: "US".to_string(),
        email: "rosa.ibarra@example.com".to_string(),
        phone: "409-555-0103".to_string(),
    };
    system
        .directory_client
        .set_contact(customer_id.clone(), profile.clone(), profile.clone())
        .await
        .unwrap();

    let config = SimulatorConfig {
        min_order_products: 1,
        max_order_products: 1,
        ..manual_config()
    };
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(7));
    let service_task = tokio::spawn(service.run());

    let first = handle.trigger_now().await.expect("first synthesis failed");
    let second = handle.trigger_now().await.expect("second synthesis failed");
    assert_eq!(first, OrderId(1));
    assert_eq!(second, OrderId(2));

    let order = system
        .order_client
        .get(first.clone())
        .await
        .unwrap()
        .expect("order must exist");

    assert_eq!(order.customer_id, customer_id);
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.payment_method, PAYMENT_METHOD);
    assert_eq!(order.payment_method_title, PAYMENT_METHOD_TITLE);
    assert_eq!(order.billing, profile);
    assert_eq!(order.shipping, profile);

    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].quantity, 1);
    let product = system
        .catalog_client
        .get(order.lines[0].product_id.clone())
        .await
        .unwrap()
        .expect("ordered product must exist");
    assert_eq!(order.total, product.price);

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn single_product_pools_merge_repeat_picks() {
    let system = StorefrontSystem::new();
    let product_ids = seed_products(&system, &[9.99]).await;
    seed_account(&system, "bulk_buyer", AccountRole::Customer).await;

    let config = SimulatorConfig {
        min_order_products: 4,
        max_order_products: 4,
        ..manual_config()
    };
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(21));
    let service_task = tokio::spawn(service.run());

    let order_id = handle.trigger_now().await.expect("synthesis failed");
    let order = system
        .order_client
        .get(order_id)
        .await
        .unwrap()
        .expect("order must exist");

    // Four draws from a one-product pool collapse into a single line.
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].product_id, product_ids[0]);
    assert_eq!(order.lines[0].quantity, 4);
    assert_eq!(order.total, 9.99 * 4.0);

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn only_customer_accounts_are_reused() {
    let system = StorefrontSystem::new();
    seed_products(&system, &[5.00]).await;
    let shopper = seed_account(&system, "the_shopper", AccountRole::Customer).await;
    seed_account(&system, "the_admin", AccountRole::Administrator).await;

    let config = manual_config();
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(3));
    let service_task = tokio::spawn(service.run());

    for _ in 0..5 {
        let order_id = handle.trigger_now().await.expect("synthesis failed");
        let order = system.order_client.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.customer_id, shopper);
    }

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn zero_completion_weights_mark_orders_failed() {
    let system = StorefrontSystem::new();
    seed_products(&system, &[15.00]).await;
    seed_account(&system, "unlucky_shopper", AccountRole::Customer).await;

    let config = SimulatorConfig {
        status_weights: StatusWeights {
            completed_pct: 0,
            processing_pct: 0,
            failed_pct: 100,
        },
        ..manual_config()
    };
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(9));
    let service_task = tokio::spawn(service.run());

    let order_id = handle.trigger_now().await.expect("synthesis failed");
    let order = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Failed);

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn scheduled_synthesis_fires_on_its_own() {
    let system = StorefrontSystem::new();
    seed_products(&system, &[22.00, 8.40]).await;
    seed_account(&system, "steady_shopper", AccountRole::Customer).await;

    // One-minute period, 30 orders: delays land in 1..=4 seconds.
    let config = SimulatorConfig {
        time_period_hours: 1.0 / 60.0,
        orders_per_period: 30,
        create_users: false,
        ..SimulatorConfig::default()
    };
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(13));
    let service_task = tokio::spawn(service.run());

    // The paused clock advances as soon as every task is idle, so each
    // sleep here lets a batch of timer fires run.
    let mut synthesized = 0;
    for _ in 0..30 {
        tokio::time::sleep(Duration::from_secs(10)).await;
        synthesized = system.order_client.list(()).await.unwrap().len();
        if synthesized >= 3 {
            break;
        }
    }
    assert!(
        synthesized >= 3,
        "expected at least 3 scheduled orders, saw {synthesized}"
    );

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn manual_triggers_leave_the_schedule_running() {
    let system = StorefrontSystem::new();
    seed_products(&system, &[11.25]).await;
    seed_account(&system, "impatient_shopper", AccountRole::Customer).await;

    let config = SimulatorConfig {
        time_period_hours: 1.0 / 60.0,
        orders_per_period: 30,
        create_users: false,
        ..SimulatorConfig::default()
    };
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(17));
    let service_task = tokio::spawn(service.run());

    // No clock movement yet, so the first order can only come from the
    // manual path.
    handle.trigger_now().await.expect("manual synthesis failed");
    let after_manual = system.order_client.list(()).await.unwrap().len();
    assert_eq!(after_manual, 1);

    // Scheduled fires continue after the manual run.
    let mut total = after_manual;
    for _ in 0..30 {
        tokio::time::sleep(Duration::from_secs(10)).await;
        total = system.order_client.list(()).await.unwrap().len();
        if total >= after_manual + 3 {
            break;
        }
    }
    assert!(
        total >= after_manual + 3,
        "expected scheduled orders after the manual run, saw {total}"
    );

    drop(handle);
    service_task.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn triggers_after_shutdown_report_stopped() {
    let system = StorefrontSystem::new();
    let config = manual_config();
    let synthesizer = synthesizer_for(&system, config.clone());
    let (service, handle) =
        SimulatorService::with_rng(config, synthesizer, StdRng::seed_from_u64(1));

    // Never started; dropping it closes the message channel.
    drop(service);

    let error = handle.trigger_now().await.unwrap_err();
    assert!(matches!(error, TriggerError::ServiceStopped));

    system.shutdown().await.unwrap();
}
