//! Onboarding flag port
//!
//! This port defines the contract for persisting and reading the onboarding
//! completion flag. Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

use super::errors::StoreError;

#[async_trait]
pub trait OnboardingFlagPort: Send + Sync {
    /// Raw persisted flag value, `None` when absent.
    async fn read_raw(&self) -> Result<Option<String>, StoreError>;

    /// Persist the flag as completed.
    async fn mark_completed(&self) -> Result<(), StoreError>;

    /// Whether onboarding has been completed. Only the literal `"true"` counts.
    async fn is_completed(&self) -> Result<bool, StoreError> {
        let raw = self.read_raw().await?;
        Ok(crate::onboarding::GateStateMachine::flag_is_completed(
            raw.as_deref(),
        ))
    }
}
