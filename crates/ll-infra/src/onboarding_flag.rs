//! Store-backed onboarding flag

use std::sync::Arc;

use async_trait::async_trait;
use ll_core::ports::{KeyValueStorePort, OnboardingFlagPort, StoreError};
use ll_core::storage_keys::{ONBOARDING_COMPLETED, ONBOARDING_COMPLETED_VALUE};

pub struct StoreOnboardingFlagRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl StoreOnboardingFlagRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OnboardingFlagPort for StoreOnboardingFlagRepository {
    async fn read_raw(&self) -> Result<Option<String>, StoreError> {
        self.store.get(ONBOARDING_COMPLETED).await
    }

    async fn mark_completed(&self) -> Result<(), StoreError> {
        self.store
            .set(ONBOARDING_COMPLETED, ONBOARDING_COMPLETED_VALUE)
            .await
    }
}
