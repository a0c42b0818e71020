//! Key-value store port
//!
//! Durable local storage for small string values, addressed by key.
//! Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

use super::errors::StoreError;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Remove several keys.
    ///
    /// The default removes one key at a time and stops at the first failure.
    /// Adapters that can apply the removal as a single write should override it.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }

    /// Remove every key.
    async fn clear(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub Store {}

    #[async_trait]
    impl KeyValueStorePort for Store {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
        async fn remove(&self, key: &str) -> Result<(), StoreError>;
        async fn clear(&self) -> Result<(), StoreError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[tokio::test]
    async fn default_remove_many_removes_each_key_in_order() {
        let mut store = MockStore::new();
        let mut seq = Sequence::new();
        store
            .expect_remove()
            .with(eq("userData"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store
            .expect_remove()
            .with(eq("isOnboardingCompleted"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        store
            .remove_many(&["userData", "isOnboardingCompleted"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn default_remove_many_stops_at_first_failure() {
        let mut store = MockStore::new();
        store
            .expect_remove()
            .with(eq("a"))
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("disk full".to_string())));
        store.expect_remove().with(eq("b")).never();

        let result = store.remove_many(&["a", "b"]).await;

        assert_eq!(
            result,
            Err(StoreError::Unavailable("disk full".to_string()))
        );
    }
}
