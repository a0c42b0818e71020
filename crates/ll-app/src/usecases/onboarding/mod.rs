mod complete;
mod get_status;

pub use complete::CompleteOnboarding;
pub use get_status::GetOnboardingStatus;
