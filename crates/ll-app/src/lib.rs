//! Little Lemon application layer
//!
//! Use cases over the core ports, and the controllers the presentation layer
//! talks to: the onboarding gate and the profile editor.

pub mod gate;
pub mod profile_editor;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use gate::{GateError, OnboardingGate};
pub use profile_editor::ProfileEditor;
pub use usecases::{
    CompleteOnboarding, GetOnboardingStatus, LoadProfile, Logout, ProfileError, SaveProfile,
};
