mod load_profile;
mod save_profile;

pub use load_profile::LoadProfile;
pub use save_profile::SaveProfile;

use ll_core::ports::StoreError;
use ll_core::profile::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("profile storage failed: {0}")]
    Storage(#[from] StoreError),
}
