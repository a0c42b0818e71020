//! Port mocks shared by unit tests.

use async_trait::async_trait;
use ll_core::ports::{OnboardingFlagPort, ProfileRepositoryPort, StoreError};
use ll_core::profile::{Profile, ProfileLoad};

mockall::mock! {
    pub Profiles {}

    #[async_trait]
    impl ProfileRepositoryPort for Profiles {
        async fn load(&self) -> Result<ProfileLoad, StoreError>;
        async fn save(&self, profile: &Profile) -> Result<(), StoreError>;
        async fn clear(&self) -> Result<(), StoreError>;
    }
}

mockall::mock! {
    pub Flag {}

    #[async_trait]
    impl OnboardingFlagPort for Flag {
        async fn read_raw(&self) -> Result<Option<String>, StoreError>;
        async fn mark_completed(&self) -> Result<(), StoreError>;
    }
}

pub fn disk_full() -> StoreError {
    StoreError::Unavailable("disk full".to_string())
}

pub fn valid_profile() -> Profile {
    Profile::new("Tilly", "tilly@example.com")
}
