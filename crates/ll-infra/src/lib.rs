//! Infrastructure adapters: durable key-value storage and the repositories
//! built on top of it.

pub mod onboarding_flag;
pub mod profile_repo;
pub mod store;

pub use onboarding_flag::StoreOnboardingFlagRepository;
pub use profile_repo::StoreProfileRepository;
pub use store::{FileKeyValueStore, InMemoryKeyValueStore, PendingOp, WriteQueue};
