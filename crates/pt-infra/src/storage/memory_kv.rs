use std::collections::HashMap;

use async_trait::async_trait;
use pt_core::persistence::StorageKey;
use pt_core::ports::{PersistenceGatewayPort, StorageError};
use tokio::sync::RwLock;

/// Volatile store for tests and `--ephemeral` runs.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<StorageKey, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }

    pub async fn snapshot(&self) -> HashMap<StorageKey, String> {
        self.values.read().await.clone()
    }
}

#[async_trait]
impl PersistenceGatewayPort for InMemoryKeyValueStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.values.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn multi_set(&self, entries: &[(StorageKey, String)]) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        for (key, value) in entries {
            values.insert(*key, value.clone());
        }
        Ok(())
    }

    async fn multi_remove(&self, keys: &[StorageKey]) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        for key in keys {
            values.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn multi_set_and_multi_remove_touch_only_listed_keys() {
        let store = InMemoryKeyValueStore::with_entries([(StorageKey::StaleData, "false")]);

        store
            .multi_set(&[
                (StorageKey::User, "{}".to_string()),
                (StorageKey::Pets, "[]".to_string()),
            ])
            .await
            .unwrap();
        store.multi_remove(&[StorageKey::User]).await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(&StorageKey::Pets).map(String::as_str), Some("[]"));
        assert_eq!(
            snapshot.get(&StorageKey::StaleData).map(String::as_str),
            Some("false")
        );
    }
}
