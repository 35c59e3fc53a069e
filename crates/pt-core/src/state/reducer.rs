//! Pure reducer for [`AppState`].

use tracing::warn;

use super::{AppAction, AppState};

/// Pure state transition function.
///
/// 纯函数：不包含副作用。
pub struct AppReducer;

impl AppReducer {
    pub fn reduce(mut state: AppState, action: &AppAction) -> AppState {
        match action {
            AppAction::SetUser(user) => {
                state.user = Some(user.clone());
            }
            AppAction::AddPet(pet) => {
                if state.contains_pet(&pet.id) {
                    warn!(pet_id = %pet.id, "add_pet ignored: id already in use");
                } else {
                    state.pets.push(pet.clone());
                }
            }
            AppAction::UpdatePet(pet) => {
                if let Some(slot) = state.pets.iter_mut().find(|p| p.id == pet.id) {
                    *slot = pet.clone();
                }
            }
            AppAction::DeletePet(id) => {
                state.pets.retain(|pet| &pet.id != id);
            }
            AppAction::SetCurrentPhoto(photo) => {
                state.current_photo = Some(photo.clone());
            }
            AppAction::SetCurrentThought(thought) => {
                state.current_thought = Some(thought.clone());
            }
        }
        state
    }
}
