//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of how
//! and where state is actually stored.

pub mod app_dirs;
pub mod errors;
pub mod onboarding;
pub mod profile;
pub mod store;

pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, StoreError};
pub use onboarding::OnboardingFlagPort;
pub use profile::ProfileRepositoryPort;
pub use store::KeyValueStorePort;
