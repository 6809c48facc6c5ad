//! # Order Synthesizer
//!
//! Builds one fake order end to end against the storefront actors:
//! choose a product pool, resolve a customer (brand-new or reused), draw
//! the line items, submit the order, then assign its final status.
//!
//! The synthesizer owns no randomness of its own; every draw comes from
//! the generator passed in, so a seeded generator replays an identical
//! sequence of decisions.

use crate::clients::{CatalogClient, DirectoryClient, OrderClient};
use crate::config::SimulatorConfig;
use crate::identity::IdentityPool;
use crate::model::{
    AccountRole, ContactProfile, CustomerCreate, CustomerId, LineItem, OrderCreate, OrderId,
    ProductId, PAYMENT_METHOD, PAYMENT_METHOD_TITLE,
};
use crate::sim::cache::CustomerCache;
use crate::sim::error::SynthesisError;
use crate::sim::status;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use resource_actor::ActorClient;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// How many identity samples to try before giving up on an unused login.
const LOGIN_ATTEMPTS: u32 = 5;

const PASSWORD_LENGTH: usize = 24;

pub struct Synthesizer {
    config: SimulatorConfig,
    identities: IdentityPool,
    customers: CustomerCache,
    catalog: CatalogClient,
    directory: DirectoryClient,
    orders: OrderClient,
}

impl Synthesizer {
    pub fn new(
        config: SimulatorConfig,
        identities: IdentityPool,
        catalog: CatalogClient,
        directory: DirectoryClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            config,
            identities,
            customers: CustomerCache::new(),
            catalog,
            directory,
            orders,
        }
    }

    /// Synthesizes one order and returns its identifier.
    ///
    /// The steps run in a fixed sequence: resolve the product pool, draw
    /// the line count, resolve a customer, draw the lines, copy the
    /// customer's contact profiles, submit with the offline payment
    /// marker, then roll and assign the final status (which also resets
    /// the order's timestamp to now).
    pub async fn synthesize_order(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<OrderId, SynthesisError> {
        let pool = self.resolve_product_pool().await?;
        let line_count = rng.gen_range(
            self.config.min_order_products..=self.config.max_order_products,
        );
        let customer_id = self.resolve_customer(rng).await?;
        let lines = draw_line_items(&pool, line_count, rng);
        let (billing, shipping) = self.customer_contact(&customer_id).await?;

        let order_id = self
            .orders
            .place_order(OrderCreate {
                customer_id: customer_id.clone(),
                lines,
                billing,
                shipping,
                payment_method: PAYMENT_METHOD.to_string(),
                payment_method_title: PAYMENT_METHOD_TITLE.to_string(),
            })
            .await?;

        let final_status = status::draw(&self.config.status_weights, rng);
        self.orders
            .assign_status(order_id.clone(), final_status, Utc::now())
            .await?;

        info!(order = %order_id, customer = %customer_id, status = %final_status, "Synthesized order");
        Ok(order_id)
    }

    /// The configured product pool, or every published product when no
    /// pool is configured.
    async fn resolve_product_pool(&self) -> Result<Vec<ProductId>, SynthesisError> {
        let pool = if self.config.products.is_empty() {
            self.catalog.list_published().await?
        } else {
            self.config.products.clone()
        };
        if pool.is_empty() {
            return Err(SynthesisError::NoProductsAvailable);
        }
        Ok(pool)
    }

    /// Flips a coin between creating a new customer and reusing an
    /// existing one. The coin is only flipped when customer creation is
    /// enabled; otherwise reuse is the only option.
    async fn resolve_customer(&mut self, rng: &mut impl Rng) -> Result<CustomerId, SynthesisError> {
        if self.config.create_users && rng.gen_bool(0.5) {
            self.create_new_customer(rng).await
        } else {
            self.pick_existing_customer(rng).await
        }
    }

    /// Creates a customer account from a sampled identity.
    ///
    /// Identities are sampled until one has an unused login, up to
    /// [`LOGIN_ATTEMPTS`] tries. The account gets a fresh random password
    /// and the identity's contact data as both billing and shipping.
    pub async fn create_new_customer(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<CustomerId, SynthesisError> {
        let mut chosen = None;
        for _ in 0..LOGIN_ATTEMPTS {
            let record = self
                .identities
                .sample(rng)
                .ok_or(SynthesisError::NoCandidateRows)?;
            if !self.directory.login_exists(&record.username).await? {
                chosen = Some(record.clone());
                break;
            }
        }
        let record = chosen.ok_or(SynthesisError::UserCreationExhausted {
            attempts: LOGIN_ATTEMPTS,
        })?;

        let id = self
            .directory
            .create_customer(CustomerCreate {
                login: record.username.clone(),
                email: record.email_address.clone(),
                first_name: record.given_name.clone(),
                last_name: record.surname.clone(),
                password: generate_password(rng, PASSWORD_LENGTH),
                role: AccountRole::Customer,
            })
            .await?;

        let profile = record.contact_profile();
        self.directory
            .set_contact(id.clone(), profile.clone(), profile)
            .await?;

        info!(customer = %id, login = %record.username, "Created customer account");
        Ok(id)
    }

    /// Picks one of the cached reusable customers uniformly.
    pub async fn pick_existing_customer(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<CustomerId, SynthesisError> {
        let ids = self.customers.ids_or_load(&self.directory).await?;
        if ids.is_empty() {
            return Err(SynthesisError::NoCustomersAvailable);
        }
        Ok(ids[rng.gen_range(0..ids.len())].clone())
    }

    /// The customer's billing and shipping profiles.
    ///
    /// A cached customer may no longer resolve (accounts can be removed
    /// while the cache lives on). The order still goes through, just with
    /// empty contact fields.
    async fn customer_contact(
        &self,
        id: &CustomerId,
    ) -> Result<(ContactProfile, ContactProfile), SynthesisError> {
        match self.directory.get(id.clone()).await? {
            Some(customer) => Ok((customer.billing, customer.shipping)),
            None => {
                warn!(customer = %id, "Customer no longer resolves, using empty contact");
                Ok((ContactProfile::default(), ContactProfile::default()))
            }
        }
    }
}

/// Draws `count` products from the pool with replacement, merging repeat
/// picks into one line with a higher quantity.
fn draw_line_items(pool: &[ProductId], count: u32, rng: &mut impl Rng) -> Vec<LineItem> {
    let mut quantities: BTreeMap<ProductId, u32> = BTreeMap::new();
    for _ in 0..count {
        let pick = pool[rng.gen_range(0..pool.len())].clone();
        *quantities.entry(pick).or_insert(0) += 1;
    }
    quantities
        .into_iter()
        .map(|(product_id, quantity)| LineItem {
            product_id,
            quantity,
        })
        .collect()
}

fn generate_password(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drawn_quantities_sum_to_the_requested_count() {
        let pool = vec![ProductId(1), ProductId(2), ProductId(3)];
        let mut rng = StdRng::seed_from_u64(42);
        let lines = draw_line_items(&pool, 7, &mut rng);

        let total: u32 = lines.iter().map(|line| line.quantity).sum();
        assert_eq!(total, 7);
        for line in &lines {
            assert!(pool.contains(&line.product_id));
        }
    }

    #[test]
    fn repeat_picks_merge_into_one_line() {
        let pool = vec![ProductId(5)];
        let mut rng = StdRng::seed_from_u64(42);
        let lines = draw_line_items(&pool, 4, &mut rng);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, ProductId(5));
        assert_eq!(lines[0].quantity, 4);
    }

    #[test]
    fn passwords_are_alphanumeric_and_sized() {
        let mut rng = StdRng::seed_from_u64(42);
        let password = generate_password(&mut rng, PASSWORD_LENGTH);
        assert_eq!(password.len(), PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
