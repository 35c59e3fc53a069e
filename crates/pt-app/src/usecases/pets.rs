use pt_core::drafts::{PetDraft, PetValidationError};
use pt_core::ids::PetId;
use pt_core::model::Pet;
use pt_core::state::AppAction;
use tracing::info;

use crate::store::StateStore;

/// Validates the pet editor and adds or replaces the pet.
pub struct SavePet;

impl SavePet {
    pub fn execute(store: &mut StateStore, draft: PetDraft) -> Result<Pet, PetValidationError> {
        let is_edit = draft.is_edit();
        let pet = draft.into_pet()?;

        let action = if is_edit {
            AppAction::UpdatePet(pet.clone())
        } else {
            AppAction::AddPet(pet.clone())
        };
        info!(pet_id = %pet.id, action = action.name(), "saving pet");
        store.dispatch(action);
        Ok(pet)
    }
}

/// Removes a pet by id. Unknown ids are a no-op.
pub struct RemovePet;

impl RemovePet {
    pub fn execute(store: &mut StateStore, pet_id: PetId) {
        info!(%pet_id, existed = store.find_pet(&pet_id).is_some(), "deleting pet");
        store.dispatch(AppAction::DeletePet(pet_id));
    }
}
