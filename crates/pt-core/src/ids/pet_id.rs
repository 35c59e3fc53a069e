use serde::{Deserialize, Serialize};

const PET_ID_PREFIX: &str = "pet_";

/// Stable identifier of a pet profile.
///
/// Ids read back from storage are accepted verbatim; only freshly created
/// pets get a generated `pet_<uuid>` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(String);

impl PetId {
    /// Generates a new, globally unique pet id.
    pub fn generate() -> Self {
        Self(format!("{PET_ID_PREFIX}{}", uuid::Uuid::new_v4().simple()))
    }
}

impl_id!(PetId);
