//! # Generic Resource Actor
//!
//! [`ResourceActor`] owns the state for one resource type and processes
//! requests strictly in arrival order, so entity code never needs locks.
//! External context (peer clients, configuration) is injected when the
//! loop starts via [`ResourceActor::run`], not at construction, which
//! keeps wiring order flexible during startup.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;

/// The actor task for a resource type `T`.
///
/// Holds the authoritative `HashMap` of entities and a monotonically
/// increasing id counter. Dropped response channels are ignored: the
/// caller went away, the state change still happened.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor and the client wired to it.
    ///
    /// The actor does nothing until [`run`](Self::run) is awaited; create
    /// every actor in the system first, then start each with its context.
    pub fn new(buffer: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    fn entity_type() -> &'static str {
        std::any::type_name::<T>().split("::").last().unwrap_or("?")
    }

    /// Runs the message loop until every client handle is dropped.
    ///
    /// `context` is whatever the entity declared it needs to do its work;
    /// the actor itself never inspects it.
    pub async fn run(mut self, context: T::Context) {
        debug!("{} actor started", Self::entity_type());
        while let Some(request) = self.receiver.recv().await {
            self.handle(request, &context).await;
        }
        debug!("{} actor stopped", Self::entity_type());
    }

    async fn handle(&mut self, request: ResourceRequest<T>, context: &T::Context) {
        match request {
            ResourceRequest::Create { params, respond_to } => {
                let id = T::Id::from(self.next_id);
                let result = match T::from_create_params(id.clone(), params) {
                    Ok(mut entity) => match entity.on_create(context).await {
                        Ok(()) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), entity);
                            debug!("Created {} {}", Self::entity_type(), id);
                            Ok(id)
                        }
                        Err(e) => Err(Self::entity_error(e)),
                    },
                    Err(e) => Err(Self::entity_error(e)),
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Get { id, respond_to } => {
                let found = self.store.get(&id).cloned();
                debug!("Get {} {} -> {}", Self::entity_type(), id, found.is_some());
                let _ = respond_to.send(Ok(found));
            }
            ResourceRequest::List { filter, respond_to } => {
                let ids: Vec<T::Id> = self
                    .store
                    .iter()
                    .filter(|(_, entity)| entity.matches(&filter))
                    .map(|(id, _)| id.clone())
                    .collect();
                debug!(
                    "List {} {:?} matched {}",
                    Self::entity_type(),
                    filter,
                    ids.len()
                );
                let _ = respond_to.send(Ok(ids));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                let result = match self.store.get_mut(&id) {
                    Some(entity) => match entity.on_update(update, context).await {
                        Ok(()) => Ok(entity.clone()),
                        Err(e) => Err(Self::entity_error(e)),
                    },
                    None => Err(FrameworkError::NotFound(id.to_string())),
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Delete { id, respond_to } => {
                let result = match self.store.remove(&id) {
                    Some(entity) => match entity.on_delete(context).await {
                        Ok(()) => {
                            debug!("Deleted {} {}", Self::entity_type(), id);
                            Ok(())
                        }
                        Err(e) => {
                            // The hook vetoed the delete, keep the entity.
                            self.store.insert(id.clone(), entity);
                            Err(Self::entity_error(e))
                        }
                    },
                    None => {
                        warn!("Delete {} {}: not found", Self::entity_type(), id);
                        Err(FrameworkError::NotFound(id.to_string()))
                    }
                };
                let _ = respond_to.send(result);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                let result = match self.store.get_mut(&id) {
                    Some(entity) => entity
                        .handle_action(action, context)
                        .await
                        .map_err(Self::entity_error),
                    None => Err(FrameworkError::NotFound(id.to_string())),
                };
                let _ = respond_to.send(result);
            }
        }
    }

    fn entity_error(e: T::Error) -> FrameworkError {
        FrameworkError::EntityError(Box::new(e))
    }
}
