//! # Order Client
//!
//! High-level API for the order actor. Wraps a `ResourceClient<Order>`
//! and speaks [`OrderError`].

use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Submits an order. Line pricing and validation happen in the order
    /// actor's `on_create` hook.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(customer = %params.customer_id, lines = params.lines.len(), "Placing order");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Assigns the terminal status and resets the creation timestamp.
    #[instrument(skip(self))]
    pub async fn assign_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        let result = self
            .inner
            .perform_action(id, OrderAction::AssignStatus { status, created_at })
            .await
            .map_err(Self::map_error)?;
        match result {
            OrderActionResult::AssignStatus(()) => Ok(()),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
