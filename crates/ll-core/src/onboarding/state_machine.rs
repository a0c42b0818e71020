//! Onboarding gate state machine.
//!
//! Pure transition function. Side effects (store reads and writes) are driven
//! by the controller in the application layer, which feeds the outcome back
//! in as events.

use serde::{Deserialize, Serialize};

use crate::storage_keys::ONBOARDING_COMPLETED_VALUE;

/// Top-level flow shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// Initial state on every process start, until the flag has been read.
    Loading,
    /// First-run form.
    Onboarding,
    /// Main app.
    Home,
}

/// Facts that drive the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    /// The persisted flag has been read.
    FlagLoaded { completed: bool },
    /// Profile and flag were both written successfully.
    OnboardingPersisted,
    /// All persisted session state was erased.
    LoggedOut,
}

pub struct GateStateMachine;

impl GateStateMachine {
    /// Next state for `event`. Events that do not apply to `state` leave it unchanged.
    pub fn transition(state: GateState, event: GateEvent) -> GateState {
        match (state, event) {
            (GateState::Loading, GateEvent::FlagLoaded { completed: true }) => GateState::Home,
            (GateState::Loading, GateEvent::FlagLoaded { completed: false }) => {
                GateState::Onboarding
            }
            (GateState::Onboarding, GateEvent::OnboardingPersisted) => GateState::Home,
            (GateState::Home | GateState::Onboarding, GateEvent::LoggedOut) => {
                GateState::Onboarding
            }
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?state, event = ?_event, "gate event does not apply, state kept");
                state
            }
        }
    }

    /// Interpret the raw flag value. Anything other than the literal `"true"` means "not completed".
    pub fn flag_is_completed(raw: Option<&str>) -> bool {
        raw == Some(ONBOARDING_COMPLETED_VALUE)
    }

    /// Initial state for a cold start with the given raw flag value.
    pub fn resolve_initial(raw: Option<&str>) -> GateState {
        Self::transition(
            GateState::Loading,
            GateEvent::FlagLoaded {
                completed: Self::flag_is_completed(raw),
            },
        )
    }
}
