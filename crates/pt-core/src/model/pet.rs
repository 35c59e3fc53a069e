use serde::{Deserialize, Serialize};

use crate::ids::PetId;

/// Trait labels offered by the pet editor as one-tap suggestions.
pub const SUGGESTED_TRAITS: [&str; 8] = [
    "Loving",
    "Independent",
    "Playful",
    "Shy",
    "Energetic",
    "Lazy",
    "Curious",
    "Mischievous",
];

/// Personality traits attached to a pet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTraits {
    /// Labels picked from [`SUGGESTED_TRAITS`]; no duplicates.
    #[serde(default)]
    pub suggested: Vec<String>,
    /// Free-form labels typed by the owner.
    #[serde(default)]
    pub custom: Vec<String>,
}

impl PetTraits {
    pub fn is_empty(&self) -> bool {
        self.suggested.is_empty() && self.custom.is_empty()
    }

    /// All labels, suggested first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.suggested
            .iter()
            .chain(self.custom.iter())
            .map(String::as_str)
    }
}

/// Pet profile.
///
/// Serialized with the field names the storage layout uses (`type`,
/// `favoriteThings`); optional fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Kind of animal, e.g. "Cat" or "Dog".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<PetTraits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quirks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_things: Option<String>,
}

impl Pet {
    /// Creates a pet with only the required fields set.
    pub fn new(id: PetId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            breed: None,
            traits: None,
            quirks: None,
            favorite_things: None,
        }
    }

    /// One-line description used by list screens: `Dog • Beagle`.
    pub fn subtitle(&self) -> String {
        match &self.breed {
            Some(breed) => format!("{} • {}", self.kind, breed),
            None => self.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_pet_omits_optional_fields() {
        let pet = Pet::new(PetId::from("p1"), "Rex", "Dog");

        let json = serde_json::to_string(&pet).unwrap();

        assert_eq!(json, r#"{"id":"p1","name":"Rex","type":"Dog"}"#);
    }

    #[test]
    fn full_pet_reads_storage_field_names() {
        let json = r#"{
            "id": "p2",
            "name": "Mochi",
            "type": "Cat",
            "breed": "Persian",
            "traits": {"suggested": ["Lazy"], "custom": ["dramatic"]},
            "quirks": "sleeps in the sink",
            "favoriteThings": "tuna"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();

        assert_eq!(pet.kind, "Cat");
        assert_eq!(pet.favorite_things.as_deref(), Some("tuna"));
        let traits = pet.traits.unwrap();
        assert_eq!(traits.labels().collect::<Vec<_>>(), vec!["Lazy", "dramatic"]);
    }

    #[test]
    fn subtitle_includes_breed_when_known() {
        let mut pet = Pet::new(PetId::from("p1"), "Rex", "Dog");
        assert_eq!(pet.subtitle(), "Dog");
        pet.breed = Some("Beagle".to_string());
        assert_eq!(pet.subtitle(), "Dog • Beagle");
    }
}
