use std::sync::Arc;

use ll_core::ports::{OnboardingFlagPort, StoreError};
use tracing::{debug, info_span, Instrument};

/// Whether onboarding has been completed on this device.
pub struct GetOnboardingStatus {
    flag: Arc<dyn OnboardingFlagPort>,
}

impl GetOnboardingStatus {
    pub fn new(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { flag }
    }

    pub async fn execute(&self) -> Result<bool, StoreError> {
        let span = info_span!("usecase.get_onboarding_status.execute");

        async {
            let completed = self.flag.is_completed().await?;
            debug!(completed, "onboarding status read");
            Ok(completed)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{disk_full, MockFlag};

    fn flag_reading(raw: Option<&'static str>) -> MockFlag {
        let mut flag = MockFlag::new();
        flag.expect_read_raw()
            .returning(move || Ok(raw.map(str::to_string)));
        flag
    }

    #[tokio::test]
    async fn only_literal_true_is_completed() {
        let cases = [
            (None, false),
            (Some("true"), true),
            (Some("false"), false),
            (Some("yes"), false),
        ];
        for (raw, expected) in cases {
            let status = GetOnboardingStatus::new(Arc::new(flag_reading(raw)));
            assert_eq!(status.execute().await.unwrap(), expected, "flag {raw:?}");
        }
    }

    #[tokio::test]
    async fn read_failure_is_surfaced() {
        let mut flag = MockFlag::new();
        flag.expect_read_raw().returning(|| Err(disk_full()));

        let result = GetOnboardingStatus::new(Arc::new(flag)).execute().await;

        assert_eq!(result, Err(disk_full()));
    }
}
