//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod catalog_client;
pub mod directory_client;
pub mod order_client;

pub use catalog_client::*;
pub use directory_client::*;
pub use order_client::*;
