pub mod onboarding;
pub mod profile;
pub mod session;

pub use onboarding::{CompleteOnboarding, GetOnboardingStatus};
pub use profile::{LoadProfile, ProfileError, SaveProfile};
pub use session::Logout;
