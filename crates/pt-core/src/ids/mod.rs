//! ID type wrappers for type safety.

#[macro_use]
mod id_macro;

pub mod pet_id;
pub mod user_id;

pub use pet_id::PetId;
pub use user_id::UserId;
