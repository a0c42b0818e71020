use std::sync::Arc;

use ll_core::ports::{OnboardingFlagPort, ProfileRepositoryPort};
use ll_core::profile::{Profile, ValidationErrors};
use tracing::{info, info_span, Instrument};

use crate::usecases::ProfileError;

/// Persist the onboarding profile, then the completion flag.
///
/// The flag is only written after the profile write succeeded. If either
/// write fails the error is returned and onboarding is not complete.
/// Dropping the future between the two writes leaves the flag unset;
/// [`OnboardingGate`](crate::OnboardingGate) runs it on a spawned task.
pub struct CompleteOnboarding {
    profiles: Arc<dyn ProfileRepositoryPort>,
    flag: Arc<dyn OnboardingFlagPort>,
}

impl CompleteOnboarding {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>, flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { profiles, flag }
    }

    pub async fn execute(&self, profile: &Profile) -> Result<(), ProfileError> {
        let span = info_span!("usecase.complete_onboarding.execute");

        async {
            ValidationErrors::check_required(profile)?;
            self.profiles.save(profile).await?;
            self.flag.mark_completed().await?;
            info!("onboarding completed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
