//! State store.
//!
//! Owns the in-memory [`AppState`] and is its only mutation point. Every
//! dispatch runs the pure reducer to completion, commits the new state and
//! only then notifies observers, in registration order.

use pt_core::ids::PetId;
use pt_core::model::{Pet, User};
use pt_core::state::{AppAction, AppReducer, AppState};
use tracing::debug;

/// A committed transition as seen by observers.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    pub action: &'a AppAction,
    /// State after `action` was applied.
    pub state: &'a AppState,
}

/// Receives every committed transition.
pub trait StateObserver: Send {
    fn on_transition(&mut self, transition: Transition<'_>);
}

#[derive(Default)]
pub struct StateStore {
    state: AppState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Applies `action` and returns the committed state.
    pub fn dispatch(&mut self, action: AppAction) -> &AppState {
        let previous = std::mem::take(&mut self.state);
        self.state = AppReducer::reduce(previous, &action);
        debug!(
            action = action.name(),
            pets = self.state.pets.len(),
            has_user = self.state.user.is_some(),
            "state committed"
        );

        let transition = Transition {
            action: &action,
            state: &self.state,
        };
        for observer in &mut self.observers {
            observer.on_transition(transition);
        }
        &self.state
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn pets(&self) -> &[Pet] {
        &self.state.pets
    }

    pub fn find_pet(&self, id: &PetId) -> Option<&Pet> {
        self.state.find_pet(id)
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
