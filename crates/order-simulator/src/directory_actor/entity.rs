//! [`ActorEntity`] implementation for [`Customer`].

use crate::directory_actor::CustomerError;
use crate::model::{
    ContactProfile, Customer, CustomerCreate, CustomerFilter, CustomerId, CustomerUpdate,
};
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Accounts have no domain actions.
#[derive(Debug)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = ();
    type Filter = CustomerFilter;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.login.is_empty() {
            return Err(CustomerError::ValidationError(
                "login must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            login: params.login,
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            password: params.password,
            role: params.role,
            billing: ContactProfile::default(),
            shipping: ContactProfile::default(),
        })
    }

    fn matches(&self, filter: &CustomerFilter) -> bool {
        match filter {
            CustomerFilter::Role(role) => self.role == *role,
            CustomerFilter::Login(login) => self.login == *login,
        }
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(billing) = update.billing {
            self.billing = billing;
        }
        if let Some(shipping) = update.shipping {
            self.shipping = shipping;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
