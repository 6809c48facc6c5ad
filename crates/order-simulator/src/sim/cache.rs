//! Reusable-customer cache.
//!
//! The candidate list for "reuse an existing customer" is fetched from
//! the directory once and then held for the life of the process.
//! Accounts created or removed later are not reflected until restart.
//! Stale entries are harmless: order placement copies whatever contact
//! data still resolves and falls back to empty profiles otherwise.

use crate::clients::DirectoryClient;
use crate::directory_actor::CustomerError;
use crate::model::{AccountRole, CustomerId};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CustomerCache {
    ids: Option<Vec<CustomerId>>,
}

impl CustomerCache {
    pub fn new() -> Self {
        Self { ids: None }
    }

    /// The cached candidate list, loading it from the directory on first
    /// use. An empty directory caches an empty list.
    pub async fn ids_or_load(
        &mut self,
        directory: &DirectoryClient,
    ) -> Result<&[CustomerId], CustomerError> {
        if self.ids.is_none() {
            let ids = directory.list_by_role(AccountRole::Customer).await?;
            debug!(count = ids.len(), "Cached reusable customer list");
            self.ids = Some(ids);
        }
        Ok(self.ids.as_deref().unwrap_or(&[]))
    }

    pub fn is_loaded(&self) -> bool {
        self.ids.is_some()
    }
}
