//! Domain models for the owner, the pets and the capture session.
//!
//! `User` and `Pet` are durable; `Photo` and `Thought` only live for the
//! current session and are never written to storage.

pub mod pet;
pub mod photo;
pub mod thought;
pub mod user;

pub use pet::{Pet, PetTraits, SUGGESTED_TRAITS};
pub use photo::Photo;
pub use thought::{Thought, PLACEHOLDER_THOUGHT};
pub use user::User;
