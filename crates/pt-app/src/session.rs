//! Application session.
//!
//! Owns the store, the write queue handle and the navigation state for one
//! run of the app. The shell talks only to this type.

use std::sync::Arc;

use pt_core::drafts::{FamilyDraft, PetDraft, PetValidationError, ProfileValidationError};
use pt_core::ids::PetId;
use pt_core::model::{Pet, Photo, User};
use pt_core::navigation::{NavAction, NavEvent, NavState, NavigationMachine, Screen};
use pt_core::onboarding::ScreenGraph;
use pt_core::ports::{CaptureError, CaptureSource, CompleteOnboardingError, OnboardingCompletion};
use pt_core::state::AppState;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::deps::{AppDeps, LaunchOptions};
use crate::effects::{EffectRunner, WriteFlusher, WriteQueue};
use crate::store::StateStore;
use crate::usecases::{
    CapturePhoto, CompleteOnboarding, InitializationLoader, LaunchOutcome, MarkRecordsStale,
    RemovePet, RevealThought, SaveFamilyProfile, SavePet,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Profile(#[from] ProfileValidationError),

    #[error(transparent)]
    Pet(#[from] PetValidationError),

    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("could not finish onboarding: {0}")]
    Completion(#[from] CompleteOnboardingError),

    #[error("add at least one companion before finishing setup")]
    NoCompanions,
}

pub struct AppSession {
    store: StateStore,
    nav: NavState,
    completion: Arc<dyn OnboardingCompletion>,
    capture: CapturePhoto,
    flusher: WriteFlusher,
    writer: JoinHandle<()>,
}

impl AppSession {
    /// Builds the store, starts the writer and runs the launch sequence.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn launch(deps: AppDeps, options: LaunchOptions) -> (Self, LaunchOutcome) {
        let span = info_span!("session.launch", clear_stale = options.clear_stale_on_launch);
        async move {
            let (queue, writer) = WriteQueue::spawn(deps.gateway.clone());
            let flusher = queue.flusher();
            let mut store = StateStore::new();
            store.subscribe(Box::new(EffectRunner::new(queue)));

            if options.clear_stale_on_launch {
                if let Err(err) = MarkRecordsStale::new(deps.gateway.clone()).execute().await {
                    warn!(error = %err, "failed to mark records stale");
                }
            }

            let outcome = InitializationLoader::new(deps.gateway.clone(), deps.loading.clone())
                .execute(&mut store)
                .await;

            let completion: Arc<dyn OnboardingCompletion> = Arc::new(CompleteOnboarding::new(
                deps.gateway.clone(),
                outcome.onboarding_complete,
            ));
            let nav = NavState::mount(ScreenGraph::for_completion(outcome.onboarding_complete));
            info!(graph = ?nav.graph(), "screen graph mounted");

            let session = Self {
                store,
                nav,
                completion,
                capture: CapturePhoto::new(deps.capture),
                flusher,
                writer,
            };
            (session, outcome)
        }
        .instrument(span)
        .await
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn current_screen(&self) -> &Screen {
        self.nav.current()
    }

    pub fn onboarding_complete(&self) -> bool {
        self.completion.is_complete()
    }

    /// Whether onboarding can be finished from the current screen: pet
    /// management reached from onboarding, with at least one pet.
    pub fn can_finish_onboarding(&self) -> bool {
        matches!(
            self.nav.current(),
            Screen::PetManagement {
                reached_from_onboarding: true,
            }
        ) && !self.store.pets().is_empty()
    }

    /// Feeds `event` to the navigation machine and runs the requested actions.
    ///
    /// A failed or refused completion leaves the session in the onboarding
    /// graph.
    pub async fn navigate(&mut self, event: NavEvent) -> Result<&NavState, SessionError> {
        let span = info_span!("session.navigate", event = ?event);
        self.run_navigation(event).instrument(span).await?;
        Ok(&self.nav)
    }

    async fn run_navigation(&mut self, event: NavEvent) -> Result<(), SessionError> {
        let mut pending = vec![event];
        while let Some(event) = pending.pop() {
            let from = self.nav.current().title();
            let (next, actions) = NavigationMachine::transition(self.nav.clone(), event);
            debug!(from, to = next.current().title(), "navigation transition");
            self.nav = next;

            for action in actions {
                debug!(?action, "navigation executing action");
                match action {
                    NavAction::CompleteOnboarding => {
                        // A completed launch needs a pets record to reopen in the main graph.
                        if self.store.pets().is_empty() {
                            return Err(SessionError::NoCompanions);
                        }
                        self.completion.complete().await?;
                        if self.completion.is_complete() {
                            pending.push(NavEvent::OnboardingCompleted);
                        }
                    }
                    NavAction::RevealThought => {
                        RevealThought::execute(&mut self.store);
                    }
                }
            }
        }
        Ok(())
    }

    pub async fn save_family_profile(&mut self, draft: FamilyDraft) -> Result<User, SessionError> {
        let user = SaveFamilyProfile::execute(&mut self.store, draft)?;
        self.navigate(NavEvent::FamilySaved).await?;
        Ok(user)
    }

    pub async fn save_pet(&mut self, draft: PetDraft) -> Result<Pet, SessionError> {
        let pet = SavePet::execute(&mut self.store, draft)?;
        self.navigate(NavEvent::PetEditorClosed).await?;
        Ok(pet)
    }

    pub async fn delete_pet(&mut self, pet_id: PetId) -> Result<(), SessionError> {
        RemovePet::execute(&mut self.store, pet_id);
        self.navigate(NavEvent::PetEditorClosed).await?;
        Ok(())
    }

    /// Returns `None` when the user cancelled; navigation is unchanged then.
    pub async fn capture(&mut self, source: CaptureSource) -> Result<Option<Photo>, SessionError> {
        let photo = self.capture.execute(&mut self.store, source).await?;
        if let Some(photo) = &photo {
            self.navigate(NavEvent::PhotoCaptured {
                photo: photo.clone(),
            })
            .await?;
        }
        Ok(photo)
    }

    /// Waits until every write issued so far has been attempted.
    pub async fn flush(&self) {
        self.flusher.flush().await;
    }

    /// Drains pending writes and stops the writer.
    pub async fn shutdown(self) {
        let Self {
            store,
            flusher,
            writer,
            ..
        } = self;
        flusher.flush().await;
        drop(store);
        drop(flusher);
        if let Err(err) = writer.await {
            warn!(error = %err, "writer task ended abnormally");
        }
        info!("session closed");
    }
}
