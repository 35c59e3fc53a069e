//! In-memory application state and its pure reducer.
//!
//! # Invariants
//! - Pet ids are unique within `AppState::pets` after every transition.
//! - The reducer never performs I/O; persistence is derived from the
//!   committed action by the caller (see [`AppAction::durable_slice`]).

pub mod action;
pub mod reducer;

pub use action::{AppAction, DurableSlice};
pub use reducer::AppReducer;

use crate::ids::PetId;
use crate::model::{Pet, Photo, Thought, User};

/// Aggregate application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub user: Option<User>,
    pub pets: Vec<Pet>,
    pub current_photo: Option<Photo>,
    pub current_thought: Option<Thought>,
}

impl AppState {
    pub fn find_pet(&self, id: &PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| &pet.id == id)
    }

    pub fn contains_pet(&self, id: &PetId) -> bool {
        self.find_pet(id).is_some()
    }
}
