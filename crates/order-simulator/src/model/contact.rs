use serde::{Deserialize, Serialize};

/// Name, address, and contact fields attached to an account and copied
/// onto every order it places.
///
/// The same shape is used for billing and shipping; the simulator always
/// writes identical values to both. An account that was never given a
/// profile carries the default (all fields empty), and orders placed for
/// it get empty contact fields rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub email: String,
    pub phone: String,
}
