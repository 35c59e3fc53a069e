use pt_core::drafts::{FamilyDraft, ProfileValidationError};
use pt_core::model::User;
use pt_core::state::AppAction;
use tracing::info;

use crate::store::StateStore;

/// Validates the family form and replaces the owner profile.
///
/// An existing profile keeps its id.
pub struct SaveFamilyProfile;

impl SaveFamilyProfile {
    pub fn execute(
        store: &mut StateStore,
        draft: FamilyDraft,
    ) -> Result<User, ProfileValidationError> {
        let existing = store.user().map(|user| user.id.clone());
        let user = draft.into_user(existing.as_ref())?;

        info!(
            user_id = %user.id,
            family_members = user.family_members.len(),
            "saving owner profile"
        );
        store.dispatch(AppAction::SetUser(user.clone()));
        Ok(user)
    }
}
