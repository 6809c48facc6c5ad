//! [`ActorEntity`] implementation for [`Product`].

use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Products have no domain actions; the lifecycle verbs cover everything
/// the catalog needs.
#[derive(Debug)]
pub enum ProductAction {}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ();
    type Filter = ProductFilter;
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.price < 0.0 {
            return Err(CatalogError::ValidationError(format!(
                "price must not be negative, got {}",
                params.price
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            status: params.status,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::Published => self.status == crate::model::ProductStatus::Published,
            ProductFilter::Any => true,
        }
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(CatalogError::ValidationError(format!(
                    "price must not be negative, got {}",
                    price
                )));
            }
            self.price = price;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
