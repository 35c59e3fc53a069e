//! # Dependency Injection / 依赖注入模块
//!
//! Creates the infra adapters and groups them into [`AppDeps`].
//!
//! This is the only place allowed to depend on `pt-infra` and `pt-app` at the
//! same time. Assembly only; no decisions about what the app does with them.
//! 这里只负责"组装"，不做"决策"。

use std::sync::Arc;

use pt_app::AppDeps;
use pt_core::config::AppConfig;
use pt_core::ports::{LoadingIndicatorPort, PersistenceGatewayPort};
use pt_infra::{FileGalleryCapture, FileKeyValueStore, InMemoryKeyValueStore};
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("storage directory is not configured")]
    MissingStorageDir,
}

/// Builds the session dependencies.
///
/// `ephemeral` swaps the file store for an in-memory one; nothing survives
/// the process.
pub fn wire_dependencies(
    config: &AppConfig,
    ephemeral: bool,
    loading: Arc<dyn LoadingIndicatorPort>,
) -> WiringResult<AppDeps> {
    let gateway: Arc<dyn PersistenceGatewayPort> = if ephemeral {
        info!("using in-memory storage");
        Arc::new(InMemoryKeyValueStore::new())
    } else {
        if config.storage_dir.as_os_str().is_empty() {
            return Err(WiringError::MissingStorageDir);
        }
        info!(storage_dir = %config.storage_dir.display(), "using file storage");
        Arc::new(FileKeyValueStore::new(config.storage_dir.clone()))
    };

    Ok(AppDeps {
        gateway,
        capture: Arc::new(FileGalleryCapture::new()),
        loading,
    })
}
