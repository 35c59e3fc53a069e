use crate::ids::PetId;
use crate::model::{Pet, Photo, Thought, User};

/// Every mutation the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Replace the whole owner profile.
    SetUser(User),
    /// Append a pet; the id must not be in use.
    AddPet(Pet),
    /// Replace the pet with the same id, whole record.
    UpdatePet(Pet),
    /// Remove the pet with this id, if any.
    DeletePet(PetId),
    SetCurrentPhoto(Photo),
    SetCurrentThought(Thought),
}

/// Durable record affected by a committed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurableSlice {
    User,
    Pets,
}

impl AppAction {
    /// Durable record that must be rewritten after this action commits.
    ///
    /// `None` for the session-only fields (photo, thought).
    pub fn durable_slice(&self) -> Option<DurableSlice> {
        match self {
            Self::SetUser(_) => Some(DurableSlice::User),
            Self::AddPet(_) | Self::UpdatePet(_) | Self::DeletePet(_) => Some(DurableSlice::Pets),
            Self::SetCurrentPhoto(_) | Self::SetCurrentThought(_) => None,
        }
    }

    /// Short stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "set_user",
            Self::AddPet(_) => "add_pet",
            Self::UpdatePet(_) => "update_pet",
            Self::DeletePet(_) => "delete_pet",
            Self::SetCurrentPhoto(_) => "set_current_photo",
            Self::SetCurrentThought(_) => "set_current_thought",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_actions_have_no_durable_slice() {
        assert_eq!(
            AppAction::SetCurrentPhoto(Photo::from_uri("file:///a.jpg")).durable_slice(),
            None
        );
        assert_eq!(
            AppAction::SetCurrentThought("hi".to_string()).durable_slice(),
            None
        );
    }

    #[test]
    fn pet_actions_map_to_pets_slice() {
        let pet = Pet::new(PetId::from("p1"), "Rex", "Dog");
        assert_eq!(
            AppAction::AddPet(pet.clone()).durable_slice(),
            Some(DurableSlice::Pets)
        );
        assert_eq!(
            AppAction::UpdatePet(pet).durable_slice(),
            Some(DurableSlice::Pets)
        );
        assert_eq!(
            AppAction::DeletePet(PetId::from("p1")).durable_slice(),
            Some(DurableSlice::Pets)
        );
    }
}
