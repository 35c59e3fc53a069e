use std::sync::Arc;

use pt_core::model::{Photo, Thought, PLACEHOLDER_THOUGHT};
use pt_core::ports::{CameraCapturePort, CaptureError, CaptureSource};
use pt_core::state::AppAction;
use tracing::{info, info_span, Instrument};

use crate::store::StateStore;

/// Asks the capture adapter for a photo and makes it the current one.
pub struct CapturePhoto {
    capture: Arc<dyn CameraCapturePort>,
}

impl CapturePhoto {
    pub fn new(capture: Arc<dyn CameraCapturePort>) -> Self {
        Self { capture }
    }

    /// `Ok(None)` when the user cancelled; the current photo is left as is.
    pub async fn execute(
        &self,
        store: &mut StateStore,
        source: CaptureSource,
    ) -> Result<Option<Photo>, CaptureError> {
        let span = info_span!("usecase.capture_photo.execute", source = ?source);
        let photo = self.capture.capture(source).instrument(span).await?;

        match &photo {
            Some(photo) => {
                info!(uri = %photo.uri, width = ?photo.width, height = ?photo.height, "photo captured");
                store.dispatch(AppAction::SetCurrentPhoto(photo.clone()));
            }
            None => info!("capture cancelled"),
        }
        Ok(photo)
    }
}

/// Sets the thought shown next to the current photo.
pub struct RevealThought;

impl RevealThought {
    pub fn execute(store: &mut StateStore) -> Thought {
        let thought: Thought = PLACEHOLDER_THOUGHT.to_string();
        store.dispatch(AppAction::SetCurrentThought(thought.clone()));
        thought
    }
}
