use std::str::FromStr;

use thiserror::Error;

use crate::ids::PetId;
use crate::model::{Pet, PetTraits, SUGGESTED_TRAITS};

use super::{non_empty, split_list};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PetValidationError {
    #[error("pet name is required")]
    MissingName,

    #[error("pet type is required")]
    MissingType,

    #[error("unknown pet field: {0}")]
    UnknownField(String),

    #[error("'{0}' is not a suggested trait")]
    UnknownTrait(String),
}

/// Text fields of the pet editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetField {
    Name,
    Type,
    Breed,
    CustomTraits,
    Quirks,
    FavoriteThings,
}

impl FromStr for PetField {
    type Err = PetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" | "kind" => Ok(Self::Type),
            "breed" => Ok(Self::Breed),
            "traits" | "custom" | "custom-traits" => Ok(Self::CustomTraits),
            "quirks" => Ok(Self::Quirks),
            "favorites" | "favorite-things" => Ok(Self::FavoriteThings),
            other => Err(PetValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Pet editor form.
///
/// `target` is the pet being edited; `None` means the save adds a new pet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetDraft {
    pub target: Option<PetId>,
    pub name: String,
    pub kind: String,
    pub breed: String,
    /// Selected labels from [`SUGGESTED_TRAITS`], in palette order.
    pub suggested_traits: Vec<String>,
    /// Comma-separated, as typed.
    pub custom_traits: String,
    pub quirks: String,
    pub favorite_things: String,
}

impl PetDraft {
    pub fn new_pet() -> Self {
        Self::default()
    }

    /// Prefills the form from an existing pet.
    pub fn edit(pet: &Pet) -> Self {
        let traits = pet.traits.clone().unwrap_or_default();
        Self {
            target: Some(pet.id.clone()),
            name: pet.name.clone(),
            kind: pet.kind.clone(),
            breed: pet.breed.clone().unwrap_or_default(),
            suggested_traits: traits.suggested,
            custom_traits: traits.custom.join(", "),
            quirks: pet.quirks.clone().unwrap_or_default(),
            favorite_things: pet.favorite_things.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn set_field(&mut self, field: PetField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PetField::Name => self.name = value,
            PetField::Type => self.kind = value,
            PetField::Breed => self.breed = value,
            PetField::CustomTraits => self.custom_traits = value,
            PetField::Quirks => self.quirks = value,
            PetField::FavoriteThings => self.favorite_things = value,
        }
    }

    /// Toggles a suggested trait. Labels match case-insensitively.
    /// Returns whether the trait is selected afterwards.
    pub fn toggle_trait(&mut self, label: &str) -> Result<bool, PetValidationError> {
        let canonical = SUGGESTED_TRAITS
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| PetValidationError::UnknownTrait(label.trim().to_string()))?;

        if let Some(pos) = self.suggested_traits.iter().position(|t| t == canonical) {
            self.suggested_traits.remove(pos);
            return Ok(false);
        }

        self.suggested_traits.push((*canonical).to_string());
        self.suggested_traits.sort_by_key(|selected| {
            SUGGESTED_TRAITS
                .iter()
                .position(|candidate| candidate == selected)
        });
        Ok(true)
    }

    /// Builds the pet to dispatch. New pets get a freshly generated id.
    pub fn into_pet(self) -> Result<Pet, PetValidationError> {
        let name = non_empty(&self.name).ok_or(PetValidationError::MissingName)?;
        let kind = non_empty(&self.kind).ok_or(PetValidationError::MissingType)?;

        Ok(Pet {
            id: self.target.unwrap_or_else(PetId::generate),
            name,
            kind,
            breed: non_empty(&self.breed),
            traits: Some(PetTraits {
                suggested: self.suggested_traits,
                custom: split_list(&self.custom_traits),
            }),
            quirks: non_empty(&self.quirks),
            favorite_things: non_empty(&self.favorite_things),
        })
    }
}
