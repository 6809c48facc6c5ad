//! # Actor Client Trait
//!
//! [`ActorClient`] is the convenience layer domain clients implement on
//! top of a raw [`ResourceClient`]. An implementor supplies `inner()` and
//! an error mapping; the trait provides the ubiquitous `get`, `list` and
//! `delete` calls with tracing spans already attached, so domain clients
//! only hand-write the methods that add real vocabulary (`place_order`,
//! `list_published`, ...).

use async_trait::async_trait;

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error this client speaks.
    type Error: From<String> + Send + Sync;

    /// The underlying channel handle.
    fn inner(&self) -> &ResourceClient<T>;

    /// Converts a transport-level failure into the domain error.
    fn map_error(error: FrameworkError) -> Self::Error {
        Self::Error::from(error.to_string())
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T::Id>, Self::Error> {
        self.inner().list(filter).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
