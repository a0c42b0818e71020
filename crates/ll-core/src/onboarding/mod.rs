//! Onboarding domain.
//!
//! The gate decides between the first-run flow and the main app, backed by a
//! single persisted flag. The form holds the first-run input.

mod form;
pub mod state_machine;

pub use form::OnboardingForm;
pub use state_machine::{GateEvent, GateState, GateStateMachine};
