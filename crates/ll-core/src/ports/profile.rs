//! Profile persistence port

use async_trait::async_trait;

use super::errors::StoreError;
use crate::profile::{Profile, ProfileLoad};

#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Read the persisted profile.
    ///
    /// A stored document that does not decode is reported as
    /// [`ProfileLoad::Corrupt`], not as an error.
    async fn load(&self) -> Result<ProfileLoad, StoreError>;

    /// Replace the persisted profile with `profile` as one write.
    async fn save(&self, profile: &Profile) -> Result<(), StoreError>;

    /// Erase the profile and the onboarding flag together.
    ///
    /// Either both are gone afterwards or neither changed. Succeeds when
    /// there is nothing to erase.
    async fn clear(&self) -> Result<(), StoreError>;
}
