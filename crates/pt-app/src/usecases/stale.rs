use std::sync::Arc;

use pt_core::persistence::{StorageKey, FLAG_TRUE};
use pt_core::ports::{PersistenceGatewayPort, StorageError};
use tracing::info;

/// Marks the durable records stale so the next launch sequence wipes them.
pub struct MarkRecordsStale {
    gateway: Arc<dyn PersistenceGatewayPort>,
}

impl MarkRecordsStale {
    pub fn new(gateway: Arc<dyn PersistenceGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<(), StorageError> {
        self.gateway.set(StorageKey::StaleData, FLAG_TRUE).await?;
        info!("durable records marked stale");
        Ok(())
    }
}
