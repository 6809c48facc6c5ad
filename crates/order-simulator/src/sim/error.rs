//! Failure modes of order synthesis.

use crate::catalog_actor::CatalogError;
use crate::directory_actor::CustomerError;
use crate::order_actor::OrderError;

/// Why a synthesis run produced no order.
///
/// A failed run is not fatal to the service: the next one is scheduled
/// regardless, since most of these clear up on their own (products get
/// published, customers get created).
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// No configured pool and no published products to fall back on.
    #[error("No products available to order")]
    NoProductsAvailable,
    /// The bundled identity dataset is empty.
    #[error("No candidate identities available")]
    NoCandidateRows,
    /// Every sampled identity collided with an existing login.
    #[error("Could not find an unused login in {attempts} attempts")]
    UserCreationExhausted { attempts: u32 },
    /// Customer reuse was selected but the directory has no customers.
    #[error("No existing customers to choose from")]
    NoCustomersAvailable,
    #[error("Customer resolution failed: {0}")]
    CustomerResolutionFailed(#[from] CustomerError),
    #[error("Order placement failed: {0}")]
    OrderCreationFailed(#[from] OrderError),
    #[error("Catalog query failed: {0}")]
    CatalogQueryFailed(#[from] CatalogError),
}

/// Why a manual trigger returned no order.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// The service task is gone; nobody will answer.
    #[error("Simulator service is not running")]
    ServiceStopped,
    /// The service ran a synthesis and it failed.
    #[error("{0}")]
    Synthesis(#[from] SynthesisError),
}
