//! # Catalog Actor
//!
//! Owns the product catalog. The simulator reads it two ways: listing the
//! identifiers of published products (when no explicit product pool is
//! configured) and fetching individual products to price order lines.
//!
//! The actor has no dependencies, so its context is `()`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates the catalog actor and its client.
pub fn new() -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CatalogClient::new(generic_client))
}
