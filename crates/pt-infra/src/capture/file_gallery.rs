//! Gallery capture backed by image files on disk.
//!
//! The picked file is base64-encoded as is; width and height come from the
//! image header. Pixels are never decoded.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use pt_core::model::Photo;
use pt_core::ports::{CameraCapturePort, CaptureError, CaptureSource};
use tokio::fs;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct FileGalleryCapture;

impl FileGalleryCapture {
    pub fn new() -> Self {
        Self
    }

    async fn pick(&self, path: PathBuf) -> Result<Option<Photo>, CaptureError> {
        if path.as_os_str().is_empty() {
            debug!("gallery pick cancelled");
            return Ok(None);
        }

        let bytes = fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CaptureError::NotFound(path.clone()),
            _ => CaptureError::Read {
                path: path.clone(),
                reason: e.to_string(),
            },
        })?;

        let dimensions = read_dimensions(path.clone()).await;
        let uri = file_uri(&path);
        debug!(%uri, bytes = bytes.len(), ?dimensions, "gallery image read");

        Ok(Some(Photo {
            uri,
            base64: Some(base64::engine::general_purpose::STANDARD.encode(&bytes)),
            width: dimensions.map(|(width, _)| width),
            height: dimensions.map(|(_, height)| height),
        }))
    }
}

#[async_trait]
impl CameraCapturePort for FileGalleryCapture {
    async fn capture(&self, source: CaptureSource) -> Result<Option<Photo>, CaptureError> {
        match source {
            CaptureSource::Gallery(path) => self.pick(path).await,
            CaptureSource::Camera => Err(CaptureError::Unavailable(
                "no camera attached; pick a file from the gallery".to_string(),
            )),
        }
    }
}

/// Reads only the header; unknown formats yield `None`.
async fn read_dimensions(path: PathBuf) -> Option<(u32, u32)> {
    let result = tokio::task::spawn_blocking(move || image::image_dimensions(&path)).await;
    match result {
        Ok(Ok(dimensions)) => Some(dimensions),
        Ok(Err(err)) => {
            warn!(error = %err, "could not read image dimensions");
            None
        }
        Err(err) => {
            warn!(error = %err, "dimension probe task failed");
            None
        }
    }
}

fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}
