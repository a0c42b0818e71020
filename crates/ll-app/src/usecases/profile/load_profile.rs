use std::sync::Arc;

use ll_core::ports::{ProfileRepositoryPort, StoreError};
use ll_core::profile::ProfileLoad;
use tracing::{info_span, Instrument};

/// Read the persisted profile.
///
/// A stored document that does not decode comes back as
/// [`ProfileLoad::Corrupt`]; only storage failures are errors.
pub struct LoadProfile {
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl LoadProfile {
    pub fn new(profiles: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self { profiles }
    }

    pub async fn execute(&self) -> Result<ProfileLoad, StoreError> {
        let span = info_span!("usecase.load_profile.execute");
        self.profiles.load().instrument(span).await
    }
}
