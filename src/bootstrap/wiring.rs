//! Assembly of the client from concrete adapters.
//!
//! The only place that knows about `ll-infra` types. Everything it builds is
//! handed on behind port traits.

use std::sync::Arc;

use ll_app::OnboardingGate;
use ll_core::app_dirs::AppPaths;
use ll_core::ports::{KeyValueStorePort, OnboardingFlagPort, ProfileRepositoryPort};
use ll_infra::{FileKeyValueStore, StoreOnboardingFlagRepository, StoreProfileRepository, WriteQueue};

use crate::client::LittleLemonClient;

/// Wire the client over the file store at `paths.store_path`.
///
/// Spawns the store worker, so it must run inside a tokio runtime.
pub fn wire_client(paths: AppPaths) -> LittleLemonClient {
    let file_store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::new(paths.store_path.clone()));
    wire_client_over(paths, file_store)
}

/// Wire the client over an arbitrary backing store.
pub fn wire_client_over(paths: AppPaths, backend: Arc<dyn KeyValueStorePort>) -> LittleLemonClient {
    let (queue, worker) = WriteQueue::spawn(backend);
    let store: Arc<dyn KeyValueStorePort> = Arc::new(queue);

    let profiles: Arc<dyn ProfileRepositoryPort> =
        Arc::new(StoreProfileRepository::new(store.clone()));
    let flag: Arc<dyn OnboardingFlagPort> =
        Arc::new(StoreOnboardingFlagRepository::new(store.clone()));
    let gate = OnboardingGate::new(profiles.clone(), flag);

    LittleLemonClient::new(paths, store, profiles, gate, worker)
}
