//! Pure data structures implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod contact;
pub mod customer;
pub mod order;
pub mod product;

pub use contact::*;
pub use customer::*;
pub use order::*;
pub use product::*;
