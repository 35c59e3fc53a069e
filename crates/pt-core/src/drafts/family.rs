use thiserror::Error;

use crate::ids::UserId;
use crate::model::User;

use super::{non_empty, split_list};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileValidationError {
    #[error("owner name is required")]
    MissingOwnerName,
}

/// Family screen form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyDraft {
    pub owner_name: String,
    /// Comma-separated, as typed.
    pub family_members: String,
}

impl FamilyDraft {
    /// Prefills the form from a stored profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            owner_name: user.name.clone(),
            family_members: user.family_members.join(", "),
        }
    }

    /// Builds the replacement `User`. Keeps `existing` id when there is one so
    /// editing the profile does not mint a new identity.
    pub fn into_user(self, existing: Option<&UserId>) -> Result<User, ProfileValidationError> {
        let name = non_empty(&self.owner_name).ok_or(ProfileValidationError::MissingOwnerName)?;
        Ok(User {
            id: existing.cloned().unwrap_or_else(UserId::generate),
            name,
            family_members: split_list(&self.family_members),
        })
    }
}
