//! # Catalog Client
//!
//! High-level API for the catalog actor. Wraps a `ResourceClient<Product>`
//! and speaks [`CatalogError`].

use crate::catalog_actor::CatalogError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalog.
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!(name = %params.name, "Creating product");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Identifiers of every published product.
    #[instrument(skip(self))]
    pub async fn list_published(&self) -> Result<Vec<ProductId>, CatalogError> {
        self.inner
            .list(ProductFilter::Published)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}
