//! File-based key/value store
//!
//! One file per key under a storage directory. The file name is the hex
//! encoding of the key, so keys like `@pet_thoughts_user` stay valid file
//! names on every platform.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use pt_core::persistence::StorageKey;
use pt_core::ports::{PersistenceGatewayPort, StorageError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(hex::encode(key.as_str()))
    }

    async fn ensure_dir(&self, key: StorageKey) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Write {
                key,
                reason: format!("failed to create storage dir: {e}"),
            })
    }
}

#[async_trait]
impl PersistenceGatewayPort for FileKeyValueStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key,
                reason: e.to_string(),
            }),
        }
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.ensure_dir(key).await?;
        let write_err = |e: std::io::Error| StorageError::Write {
            key,
            reason: e.to_string(),
        };

        let mut file = fs::File::create(self.path_for(key)).await.map_err(write_err)?;
        file.write_all(value.as_bytes()).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;

        debug!(%key, bytes = value.len(), "record file written");
        Ok(())
    }

    async fn multi_remove(&self, keys: &[StorageKey]) -> Result<(), StorageError> {
        for key in keys {
            match fs::remove_file(self.path_for(*key)).await {
                Ok(()) => debug!(%key, "record file removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(StorageError::Remove {
                        key: *key,
                        reason: e.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}
