use crate::model::ContactProfile;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for directory accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Role attached to a directory account. The simulator only ever places
/// orders for accounts in the `Customer` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    Customer,
    Administrator,
}

impl Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Customer => write!(f, "customer"),
            AccountRole::Administrator => write!(f, "administrator"),
        }
    }
}

/// A directory account.
///
/// Billing and shipping profiles start empty and are filled in by an
/// update after creation; orders copy whatever the profiles hold at the
/// time of synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: AccountRole,
    pub billing: ContactProfile,
    pub shipping: ContactProfile,
}

/// Payload for creating a new account.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: AccountRole,
}

/// Payload for updating an existing account's profiles.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub billing: Option<ContactProfile>,
    pub shipping: Option<ContactProfile>,
}

/// Selects accounts out of the directory in a `List` request.
#[derive(Debug, Clone)]
pub enum CustomerFilter {
    /// Accounts holding the given role.
    Role(AccountRole),
    /// Accounts whose login name matches exactly. Used as an existence
    /// probe before creating a new account.
    Login(String),
}
