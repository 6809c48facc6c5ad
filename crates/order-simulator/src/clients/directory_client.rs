//! # Directory Client
//!
//! High-level API for the directory actor. Wraps a
//! `ResourceClient<Customer>` and speaks [`CustomerError`].

use crate::directory_actor::CustomerError;
use crate::model::{
    AccountRole, ContactProfile, Customer, CustomerCreate, CustomerFilter, CustomerId,
    CustomerUpdate,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DirectoryClient {
    inner: ResourceClient<Customer>,
}

impl DirectoryClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    /// Creates a new account.
    #[instrument(skip(self, params))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!(login = %params.login, role = %params.role, "Creating account");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Identifiers of every account holding `role`.
    #[instrument(skip(self))]
    pub async fn list_by_role(&self, role: AccountRole) -> Result<Vec<CustomerId>, CustomerError> {
        self.inner
            .list(CustomerFilter::Role(role))
            .await
            .map_err(Self::map_error)
    }

    /// Whether any account already uses `login`.
    #[instrument(skip(self))]
    pub async fn login_exists(&self, login: &str) -> Result<bool, CustomerError> {
        let matches = self
            .inner
            .list(CustomerFilter::Login(login.to_string()))
            .await
            .map_err(Self::map_error)?;
        Ok(!matches.is_empty())
    }

    /// Writes the billing and shipping profiles of an account.
    #[instrument(skip(self, billing, shipping))]
    pub async fn set_contact(
        &self,
        id: CustomerId,
        billing: ContactProfile,
        shipping: ContactProfile,
    ) -> Result<(), CustomerError> {
        self.inner
            .update(
                id,
                CustomerUpdate {
                    billing: Some(billing),
                    shipping: Some(shipping),
                },
            )
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for DirectoryClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CustomerError::ActorCommunicationError(e.to_string())
    }
}
