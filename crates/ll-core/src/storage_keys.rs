//! Persisted state keys.
//!
//! These names are part of the on-device format and must not change.

/// JSON document holding the user profile.
pub const USER_DATA: &str = "userData";

/// Onboarding completion flag. Holds [`ONBOARDING_COMPLETED_VALUE`] or is absent.
pub const ONBOARDING_COMPLETED: &str = "isOnboardingCompleted";

/// The only value of [`ONBOARDING_COMPLETED`] that counts as "completed".
pub const ONBOARDING_COMPLETED_VALUE: &str = "true";

/// Every key owned by a signed-in session, erased together on logout.
pub const SESSION_KEYS: [&str; 2] = [USER_DATA, ONBOARDING_COMPLETED];
