//! # ActorEntity Trait
//!
//! The contract every resource type must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the
//! DTOs, actions, filters, and errors for the resource, so a request built
//! for one entity type cannot be sent to another actor: the compiler rejects
//! it.
//!
//! Lifecycle hooks (`on_create`, `on_update`, `on_delete`) and the action
//! handler are async so entities can call other actors through clients
//! injected via the [`Context`](ActorEntity::Context) type.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by any resource entity managed by a `ResourceActor`.
///
/// # Associated types
///
/// The associated types form the resource's whole API surface: what it takes
/// to create one (`Create`), to mutate one (`Update`), to run a domain
/// operation on one (`Action`/`ActionResult`), and to select several out of
/// the store (`Filter`). Defining them per entity is what lets the single
/// generic actor loop serve every resource in the system.
///
/// # Errors
///
/// Each entity carries one error type for all of its operations. A single
/// per-entity enum keeps client signatures uniform at the cost of a little
/// precision (an action that can only fail one way still returns the full
/// enum), which has proven a good trade.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be constructible from the actor's `u64`
    /// sequence counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload applied to an existing instance by `on_update`.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond the lifecycle verbs.
    type Action: Send + Sync + Debug;

    /// Result type returned by `handle_action`.
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for collection-level `List` requests. Entities
    /// that are never listed can use `()` together with the default
    /// [`matches`](ActorEntity::matches).
    type Filter: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook via
    /// [`ResourceActor::run`](crate::ResourceActor::run). Use `()` when the
    /// entity needs none.
    type Context: Send + Sync;

    /// Error type for this entity's hooks and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its assigned id and creation payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity is selected by `filter` in a `List` request.
    /// Default: every entity matches.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    /// Called after construction, before the entity is stored. Failing here
    /// aborts the create and nothing is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the entity in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Failing here keeps it stored.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
