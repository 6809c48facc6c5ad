//! [`ActorEntity`] implementation for [`Order`].

use crate::clients::CatalogClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = ();
    type Context = CatalogClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError(
                "order has no line items".to_string(),
            ));
        }
        Ok(Self {
            id,
            customer_id: params.customer_id,
            lines: params.lines,
            billing: params.billing,
            shipping: params.shipping,
            payment_method: params.payment_method,
            payment_method_title: params.payment_method_title,
            status: OrderStatus::Pending,
            total: 0.0,
            created_at: Utc::now(),
        })
    }

    /// Prices every line against the live catalog. A line referencing a
    /// product the catalog no longer knows aborts the create.
    async fn on_create(&mut self, catalog: &CatalogClient) -> Result<(), Self::Error> {
        let mut total = 0.0;
        for line in &self.lines {
            let product = catalog
                .get(line.product_id.clone())
                .await
                .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
                .ok_or_else(|| OrderError::UnknownProduct(line.product_id.to_string()))?;
            total += product.price * f64::from(line.quantity);
        }
        self.total = total;
        debug!("Priced {} at {:.2}", self.id, self.total);
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::AssignStatus { status, created_at } => {
                self.status = status;
                self.created_at = created_at;
                Ok(OrderActionResult::AssignStatus(()))
            }
        }
    }
}
