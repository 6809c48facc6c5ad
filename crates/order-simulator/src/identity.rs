//! # Candidate Identity Pool
//!
//! Read-only reference data used to manufacture customer accounts: a
//! table of synthetic person records bundled with the binary. Rows are
//! sampled at random, never mutated; login collisions are handled by the
//! caller resampling.

use crate::model::ContactProfile;
use rand::Rng;
use serde::Deserialize;

/// One synthetic person, as stored in the bundled dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityRecord {
    pub username: String,
    pub email_address: String,
    pub given_name: String,
    pub surname: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub telephone_number: String,
}

impl IdentityRecord {
    /// Projects the record onto the contact fields an account carries.
    pub fn contact_profile(&self) -> ContactProfile {
        ContactProfile {
            first_name: self.given_name.clone(),
            last_name: self.surname.clone(),
            address_1: self.street_address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postcode: self.zip_code.clone(),
            country: self.country.clone(),
            email: self.email_address.clone(),
            phone: self.telephone_number.clone(),
        }
    }
}

const BUNDLED_IDENTITIES: &str = include_str!("../data/identities.json");

/// The pool of candidate identities.
pub struct IdentityPool {
    records: Vec<IdentityRecord>,
}

impl IdentityPool {
    /// Loads the dataset bundled into the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(BUNDLED_IDENTITIES)?;
        Ok(Self { records })
    }

    /// Builds a pool from explicit records.
    pub fn from_records(records: Vec<IdentityRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One record drawn uniformly, or `None` if the pool is empty.
    pub fn sample(&self, rng: &mut impl Rng) -> Option<&IdentityRecord> {
        if self.records.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.records.len());
        Some(&self.records[index])
    }
}
