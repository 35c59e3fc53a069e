use thiserror::Error;

use crate::model::{Pet, User};

/// Stored value of a set flag.
pub const FLAG_TRUE: &str = "true";
/// Stored value of a cleared flag.
pub const FLAG_FALSE: &str = "false";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to encode {record} record: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode {record} record: {source}")]
    Decode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn encode_user(user: &User) -> Result<String, RecordError> {
    serde_json::to_string(user).map_err(|source| RecordError::Encode {
        record: "user",
        source,
    })
}

pub fn decode_user(blob: &str) -> Result<User, RecordError> {
    serde_json::from_str(blob).map_err(|source| RecordError::Decode {
        record: "user",
        source,
    })
}

pub fn encode_pets(pets: &[Pet]) -> Result<String, RecordError> {
    serde_json::to_string(pets).map_err(|source| RecordError::Encode {
        record: "pets",
        source,
    })
}

pub fn decode_pets(blob: &str) -> Result<Vec<Pet>, RecordError> {
    serde_json::from_str(blob).map_err(|source| RecordError::Decode {
        record: "pets",
        source,
    })
}

/// A flag counts as set only when the stored value is exactly `"true"`.
pub fn flag_is_true(value: Option<&str>) -> bool {
    value == Some(FLAG_TRUE)
}
