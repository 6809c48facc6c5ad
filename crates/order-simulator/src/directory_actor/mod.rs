//! # Directory Actor
//!
//! Owns the account directory. The simulator creates customer accounts
//! here, probes login names for uniqueness before creating, lists
//! accounts by role to pick an existing customer, and reads profiles to
//! copy contact fields onto orders.
//!
//! The actor has no dependencies, so its context is `()`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DirectoryClient;
use crate::model::Customer;
use resource_actor::ResourceActor;

/// Creates the directory actor and its client.
pub fn new() -> (ResourceActor<Customer>, DirectoryClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, DirectoryClient::new(generic_client))
}
