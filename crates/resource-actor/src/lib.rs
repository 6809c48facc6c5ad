//! # Resource Actor
//!
//! Generic building blocks for type-safe resource actors on Tokio. Each
//! resource type (a product catalog entry, a customer account, an order)
//! gets its own actor that owns its state exclusively and processes
//! requests sequentially from an mpsc queue, so no locks are ever needed
//! around the store.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - your domain type plus the associated
//!    DTO, action, filter, and error types that make every operation
//!    compile-time checked.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop. One Tokio task
//!    per actor; messages handled one at a time.
//! 3. **Interface** ([`ResourceClient`]) - a cheaply cloneable handle that
//!    turns method calls into request/oneshot round-trips.
//!
//! ## Operations
//!
//! The request set is resource-oriented: `Create`, `Get`, `List`, `Update`,
//! `Delete`, plus a custom `Action` escape hatch for domain operations that
//! do not fit the lifecycle verbs (reserving stock, finalizing an order).
//! `List` is collection-level: it scans the actor's store and returns the
//! ids of entities matching an entity-defined [`ActorEntity::Filter`], which
//! is how callers enumerate published products or accounts in a role
//! without holding any reference to the store itself.
//!
//! ## Context injection
//!
//! Dependencies (usually other actors' clients) are passed to
//! [`ResourceActor::run`], not to the constructor. This late binding keeps
//! construction free of circular references: create every actor first, then
//! start each one with the clients it needs.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u64, value: i64 }
//!
//! #[derive(Debug)] struct CounterCreate { start: i64 }
//! #[derive(Debug)] struct CounterUpdate { set_to: i64 }
//! #[derive(Debug)] enum CounterAction { Add(i64) }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u64;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Filter = ();
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u64, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.value = update.set_to;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Add(n) => {
//!                 self.value += n;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 1 }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Add(41)).await.unwrap();
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which speaks the same channel
//! protocol as a real actor but answers from a queue of expectations, and
//! lower-level helpers for asserting on individual requests. See the module
//! docs for the patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
