//! Facade handed to the presentation layer.

use std::sync::Arc;

use ll_app::{GateError, OnboardingGate, ProfileEditor};
use ll_core::app_dirs::AppPaths;
use ll_core::onboarding::{GateState, OnboardingForm};
use ll_core::ports::{KeyValueStorePort, ProfileRepositoryPort};
use ll_core::MenuBrowser;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct LittleLemonClient {
    paths: AppPaths,
    store: Arc<dyn KeyValueStorePort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    gate: OnboardingGate,
    store_worker: JoinHandle<()>,
}

impl LittleLemonClient {
    pub(crate) fn new(
        paths: AppPaths,
        store: Arc<dyn KeyValueStorePort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        gate: OnboardingGate,
        store_worker: JoinHandle<()>,
    ) -> Self {
        Self {
            paths,
            store,
            profiles,
            gate,
            store_worker,
        }
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Resolve the initial top-level flow from the persisted flag.
    ///
    /// An unreadable flag is reported as [`GateError::FlagUnreadable`]; the
    /// gate still shows onboarding in that case.
    pub async fn start(&self) -> Result<GateState, GateError> {
        self.gate.start().await
    }

    pub fn gate(&self) -> &OnboardingGate {
        &self.gate
    }

    /// Fresh state for the onboarding screen.
    pub fn onboarding_form(&self) -> OnboardingForm {
        OnboardingForm::new()
    }

    /// Session for the profile screen. Call [`ProfileEditor::activate`] on each visit.
    pub fn profile_editor(&self) -> ProfileEditor {
        ProfileEditor::new(self.profiles.clone())
    }

    /// Browser over the house menu.
    pub fn menu_browser(&self) -> MenuBrowser {
        MenuBrowser::default()
    }

    /// Raw ordered store access.
    pub fn store(&self) -> Arc<dyn KeyValueStorePort> {
        self.store.clone()
    }

    /// Stop accepting work and wait until every queued store operation has run.
    ///
    /// Store handles obtained from [`store`](Self::store) or a
    /// [`ProfileEditor`] keep the worker alive until they are dropped too.
    pub async fn shutdown(self) {
        let Self {
            store,
            profiles,
            gate,
            store_worker,
            ..
        } = self;
        drop(gate);
        drop(profiles);
        drop(store);

        match store_worker.await {
            Ok(()) => info!("store worker drained"),
            Err(err) => warn!(error = %err, "store worker ended abnormally"),
        }
    }
}
