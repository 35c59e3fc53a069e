#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pt_app::{AppDeps, AppSession, LaunchOptions, LaunchOutcome};
use pt_core::model::Photo;
use pt_core::persistence::StorageKey;
use pt_core::ports::{
    CameraCapturePort, CaptureError, CaptureSource, LoadingIndicatorPort, PersistenceGatewayPort,
    StorageError,
};
use pt_infra::InMemoryKeyValueStore;

#[derive(Default)]
pub struct NoopIndicator {
    pub cleared: AtomicUsize,
}

impl LoadingIndicatorPort for NoopIndicator {
    fn show(&self) {}

    fn clear(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hands out the same photo on every capture.
pub struct StaticCapture(pub Photo);

#[async_trait]
impl CameraCapturePort for StaticCapture {
    async fn capture(&self, _source: CaptureSource) -> Result<Option<Photo>, CaptureError> {
        Ok(Some(self.0.clone()))
    }
}

/// Wraps a real store and fails every write to `HasLaunched` while armed.
pub struct FlakyGateway {
    pub inner: InMemoryKeyValueStore,
    pub fail_has_launched: AtomicBool,
    pub fail_reads: AtomicBool,
}

impl FlakyGateway {
    pub fn new(inner: InMemoryKeyValueStore) -> Self {
        Self {
            inner,
            fail_has_launched: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl PersistenceGatewayPort for FlakyGateway {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("injected read failure".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        if key == StorageKey::HasLaunched && self.fail_has_launched.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                key,
                reason: "injected write failure".to_string(),
            });
        }
        self.inner.set(key, value).await
    }

    async fn multi_remove(&self, keys: &[StorageKey]) -> Result<(), StorageError> {
        self.inner.multi_remove(keys).await
    }
}

/// Routes session logs to the test harness; `RUST_LOG` narrows them.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn deps(gateway: Arc<dyn PersistenceGatewayPort>) -> AppDeps {
    AppDeps {
        gateway,
        capture: Arc::new(StaticCapture(Photo::from_uri("file:///tmp/cat.jpg"))),
        loading: Arc::new(NoopIndicator::default()),
    }
}

pub async fn launch(gateway: Arc<dyn PersistenceGatewayPort>) -> (AppSession, LaunchOutcome) {
    AppSession::launch(deps(gateway), LaunchOptions::default()).await
}
