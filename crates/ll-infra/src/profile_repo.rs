//! Store-backed profile repository
//!
//! The profile lives as one JSON document under [`USER_DATA`]. Clearing the
//! profile also drops the onboarding flag, in a single `remove_many`.

use std::sync::Arc;

use async_trait::async_trait;
use ll_core::ports::{KeyValueStorePort, ProfileRepositoryPort, StoreError};
use ll_core::profile::{Profile, ProfileLoad};
use ll_core::storage_keys::{SESSION_KEYS, USER_DATA};
use tracing::warn;

pub struct StoreProfileRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl StoreProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepositoryPort for StoreProfileRepository {
    async fn load(&self) -> Result<ProfileLoad, StoreError> {
        let raw = self.store.get(USER_DATA).await?;
        let load = ProfileLoad::from_stored(raw.as_deref());

        if let ProfileLoad::Corrupt { reason } = &load {
            warn!(key = USER_DATA, reason = %reason, "stored profile does not decode, ignoring it");
        }

        Ok(load)
    }

    async fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let json = profile
            .to_json()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(USER_DATA, &json).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove_many(&SESSION_KEYS).await
    }
}
