use std::sync::Arc;

use ll_core::ports::ProfileRepositoryPort;
use ll_core::profile::{Profile, ValidationErrors};
use tracing::{info, info_span, Instrument};

use super::ProfileError;

/// Persist the whole profile in one write.
///
/// Profiles missing a valid first name or email are rejected before the
/// store is touched.
pub struct SaveProfile {
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl SaveProfile {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self { profiles }
    }

    pub async fn execute(&self, profile: &Profile) -> Result<(), ProfileError> {
        let span = info_span!("usecase.save_profile.execute");

        async {
            ValidationErrors::check_required(profile)?;
            self.profiles.save(profile).await?;
            info!("profile saved");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{disk_full, valid_profile, MockProfiles};
    use ll_core::profile::ProfileField;
    use ll_core::ports::StoreError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn saves_valid_profile() {
        let mut profiles = MockProfiles::new();
        profiles
            .expect_save()
            .with(eq(valid_profile()))
            .times(1)
            .returning(|_| Ok(()));

        SaveProfile::new(Arc::new(profiles))
            .execute(&valid_profile())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejects_incomplete_profile_without_writing() {
        let mut profiles = MockProfiles::new();
        profiles.expect_save().never();

        let result = SaveProfile::new(Arc::new(profiles))
            .execute(&Profile::new("Tilly2", "tilly@example"))
            .await;

        match result {
            Err(ProfileError::Validation(errors)) => {
                assert!(errors.contains(ProfileField::FirstName));
                assert!(errors.contains(ProfileField::Email));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let mut profiles = MockProfiles::new();
        profiles.expect_save().returning(|_| Err(disk_full()));

        let result = SaveProfile::new(Arc::new(profiles))
            .execute(&valid_profile())
            .await;

        assert!(matches!(
            result,
            Err(ProfileError::Storage(StoreError::Unavailable(_)))
        ));
    }
}
