//! # Order Actor
//!
//! Owns the synthesized orders. Creation prices every line item against
//! the live catalog, which is why this actor runs with a
//! [`CatalogClient`](crate::clients::CatalogClient) as its context; status
//! assignment afterwards goes through [`OrderAction::AssignStatus`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates the order actor and its client.
///
/// Start the returned actor with `actor.run(catalog_client)`; the catalog
/// dependency is injected at run time, not here.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}
