//! # Generic Messages
//!
//! Request types exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor). Every variant carries a
//! oneshot sender the actor answers on; a dropped sender simply means the
//! caller stopped waiting.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests a resource actor understands.
///
/// The variants map onto the resource lifecycle (`Create`, `Get`, `List`,
/// `Update`, `Delete`) plus `Action` for entity-specific operations. The
/// payload types come from the entity's [`ActorEntity`] associated types,
/// so a `Create` built for one resource cannot be addressed to another.
///
/// `List` is the one collection-level request: instead of targeting a
/// single id it carries an [`ActorEntity::Filter`] and yields the ids of
/// every stored entity the filter selects.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T::Id>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
