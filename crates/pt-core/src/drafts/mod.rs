//! Editor drafts.
//!
//! Form input as typed by the owner, validated and turned into domain values
//! before anything is dispatched. Invalid drafts never reach the store.

pub mod family;
pub mod pet;

pub use family::{FamilyDraft, ProfileValidationError};
pub use pet::{PetDraft, PetField, PetValidationError};

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
