//! Onboarding gate controller
//!
//! Owns the single [`GateState`] for the process. The presentation layer
//! observes it through a `watch` receiver and drives it with three commands.
//! Commands are serialized: a second command waits until the first has
//! finished its store writes and published its outcome.
//!
//! Commands that write run on a spawned task. Dropping the returned future
//! only stops observing the outcome; once issued, the writes and the state
//! transition still happen.

use std::future::Future;
use std::sync::Arc;

use ll_core::onboarding::{GateEvent, GateState, GateStateMachine};
use ll_core::ports::{OnboardingFlagPort, ProfileRepositoryPort, StoreError};
use ll_core::profile::Profile;
use tokio::sync::{watch, Mutex};
use tracing::{error, info, info_span, warn, Instrument, Span};

use crate::usecases::{CompleteOnboarding, GetOnboardingStatus, Logout, ProfileError};

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("cannot {command} while {state:?}")]
    InvalidTransition {
        command: &'static str,
        state: GateState,
    },
    /// The flag could not be read at start. The gate fell back to `fallback`.
    #[error("onboarding flag unreadable, showing {fallback:?}: {source}")]
    FlagUnreadable {
        source: StoreError,
        fallback: GateState,
    },
    #[error("gate command did not finish: {0}")]
    Interrupted(String),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

struct GateCore {
    status: GetOnboardingStatus,
    complete: CompleteOnboarding,
    clear_session: Logout,
    state_tx: watch::Sender<GateState>,
}

impl GateCore {
    fn state(&self) -> GateState {
        *self.state_tx.borrow()
    }

    fn expect_state(
        &self,
        command: &'static str,
        allowed: impl FnOnce(GateState) -> bool,
    ) -> Result<(), GateError> {
        let state = self.state();
        if allowed(state) {
            Ok(())
        } else {
            Err(GateError::InvalidTransition { command, state })
        }
    }

    fn apply(&self, event: GateEvent) -> GateState {
        let from = self.state();
        let to = GateStateMachine::transition(from, event);
        self.state_tx.send_replace(to);
        info!(?from, ?to, ?event, "gate transition");
        to
    }
}

pub struct OnboardingGate {
    core: Arc<GateCore>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl OnboardingGate {
    pub fn new(
        profiles: Arc<dyn ProfileRepositoryPort>,
        flag: Arc<dyn OnboardingFlagPort>,
    ) -> Self {
        let (state_tx, _) = watch::channel(GateState::Loading);
        let core = GateCore {
            status: GetOnboardingStatus::new(flag.clone()),
            complete: CompleteOnboarding::new(profiles.clone(), flag),
            clear_session: Logout::new(profiles),
            state_tx,
        };
        Self {
            core: Arc::new(core),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> GateState {
        self.core.state()
    }

    /// Read-only view of the state, updated after every transition.
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.core.state_tx.subscribe()
    }

    /// Resolve `Loading` from the persisted flag.
    ///
    /// An unreadable flag still moves the gate to `Onboarding`, but the read
    /// failure is returned as [`GateError::FlagUnreadable`] so the caller can
    /// tell it apart from a first run. Once resolved, further calls return
    /// the current state without reading the store again.
    pub async fn start(&self) -> Result<GateState, GateError> {
        let _dispatch_guard = self.dispatch_lock.lock().await;
        let span = info_span!("app.gate.start");
        let core = &self.core;

        async {
            let state = core.state();
            if state != GateState::Loading {
                return Ok(state);
            }

            match core.status.execute().await {
                Ok(completed) => Ok(core.apply(GateEvent::FlagLoaded { completed })),
                Err(source) => {
                    warn!(error = %source, "onboarding flag unreadable, showing onboarding");
                    let fallback = core.apply(GateEvent::FlagLoaded { completed: false });
                    Err(GateError::FlagUnreadable { source, fallback })
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Persist `profile` and the completion flag, then move to `Home`.
    ///
    /// On any failure the gate stays in `Onboarding`.
    pub async fn complete_onboarding(&self, profile: &Profile) -> Result<GateState, GateError> {
        let profile = profile.clone();
        self.dispatch(info_span!("app.gate.complete_onboarding"), |core| async move {
            core.expect_state("complete onboarding", |s| s == GateState::Onboarding)?;
            core.complete.execute(&profile).await?;
            Ok(core.apply(GateEvent::OnboardingPersisted))
        })
        .await
    }

    /// Erase the session state, then move to `Onboarding`.
    ///
    /// On failure the gate keeps its current state.
    pub async fn logout(&self) -> Result<GateState, GateError> {
        self.dispatch(info_span!("app.gate.logout"), |core| async move {
            core.expect_state("log out", |s| s != GateState::Loading)?;
            core.clear_session.execute().await?;
            Ok(core.apply(GateEvent::LoggedOut))
        })
        .await
    }

    /// Run `command` on its own task once the dispatch lock is held.
    ///
    /// The lock is taken before spawning, so commands run in issue order.
    async fn dispatch<F, Fut>(&self, span: Span, command: F) -> Result<GateState, GateError>
    where
        F: FnOnce(Arc<GateCore>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<GateState, GateError>> + Send + 'static,
    {
        let dispatch_guard = self.dispatch_lock.clone().lock_owned().await;
        let core = self.core.clone();

        let task = tokio::spawn(
            async move {
                let _dispatch_guard = dispatch_guard;
                let outcome = command(core).await;
                if let Err(err) = &outcome {
                    warn!(error = %err, "gate command failed");
                }
                outcome
            }
            .instrument(span),
        );

        task.await.map_err(|err| {
            error!(error = %err, "gate command task ended abnormally");
            GateError::Interrupted(err.to_string())
        })?
    }
}
