use std::sync::Arc;

use ll_core::ports::{ProfileRepositoryPort, StoreError};
use tracing::{info, info_span, Instrument};

/// Erase the profile and the onboarding flag.
///
/// Both keys go in a single repository call; on failure nothing is reported
/// as cleared and the caller should retry. Logging out twice is not an error.
pub struct Logout {
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl Logout {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self { profiles }
    }

    pub async fn execute(&self) -> Result<(), StoreError> {
        let span = info_span!("usecase.logout.execute");

        async {
            self.profiles.clear().await?;
            info!("session state cleared");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{disk_full, MockProfiles};

    #[tokio::test]
    async fn clears_through_repository() {
        let mut profiles = MockProfiles::new();
        profiles.expect_clear().times(2).returning(|| Ok(()));
        let logout = Logout::new(Arc::new(profiles));

        logout.execute().await.unwrap();
        logout.execute().await.unwrap();
    }

    #[tokio::test]
    async fn failure_is_surfaced() {
        let mut profiles = MockProfiles::new();
        profiles.expect_clear().returning(|| Err(disk_full()));

        assert_eq!(Logout::new(Arc::new(profiles)).execute().await, Err(disk_full()));
    }
}
