use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Publication state of a catalog product. Only published products are
/// eligible for synthesized orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Published,
    Draft,
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub status: Option<ProductStatus>,
}

/// Selects products out of the catalog in a `List` request.
#[derive(Debug, Clone)]
pub enum ProductFilter {
    /// Only products whose status is [`ProductStatus::Published`].
    Published,
    /// Every product regardless of status.
    Any,
}
