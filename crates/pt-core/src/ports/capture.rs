use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Photo;

/// Where the photo comes from. Both sources yield the same `Photo` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    Camera,
    Gallery(PathBuf),
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture source not available: {0}")]
    Unavailable(String),

    #[error("image not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read image {path}: {reason}")]
    Read { path: PathBuf, reason: String },
}

#[async_trait]
pub trait CameraCapturePort: Send + Sync {
    /// Returns `Ok(None)` when the user cancels.
    async fn capture(&self, source: CaptureSource) -> Result<Option<Photo>, CaptureError>;
}
