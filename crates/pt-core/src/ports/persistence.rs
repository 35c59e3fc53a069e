//! Durable key/value storage port.
//!
//! The app mirrors its durable records into a device-local string store.
//! There is no cross-key atomicity: every call may fail independently.

use async_trait::async_trait;
use thiserror::Error;

use crate::persistence::StorageKey;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {key}: {reason}")]
    Read { key: StorageKey, reason: String },

    #[error("failed to write {key}: {reason}")]
    Write { key: StorageKey, reason: String },

    #[error("failed to remove {key}: {reason}")]
    Remove { key: StorageKey, reason: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PersistenceGatewayPort: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Writes every pair. Pairs already written stay written if a later one fails.
    async fn multi_set(&self, entries: &[(StorageKey, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(*key, value).await?;
        }
        Ok(())
    }

    /// Removing a key that is not stored is not an error.
    async fn multi_remove(&self, keys: &[StorageKey]) -> Result<(), StorageError>;
}

#[cfg(test)]
mockall::mock! {
    pub Gateway {}

    #[async_trait]
    impl PersistenceGatewayPort for Gateway {
        async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
        async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;
        async fn multi_remove(&self, keys: &[StorageKey]) -> Result<(), StorageError>;
    }
}
