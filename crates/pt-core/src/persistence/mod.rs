//! Durable record layout.
//!
//! # Responsibility
//! - Name the keys the app owns in device-local storage.
//! - Encode/decode the JSON blobs stored under those keys.
//!
//! # Invariants
//! - Only `User` and `Pet` data are ever encoded; session fields have no
//!   durable representation.

pub mod keys;
pub mod records;

pub use keys::StorageKey;
pub use records::{
    decode_pets, decode_user, encode_pets, encode_user, flag_is_true, RecordError, FLAG_FALSE,
    FLAG_TRUE,
};
