use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Owner profile collected on the family screen.
///
/// Always created and replaced as a whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Other people in the household, in entry order.
    #[serde(default)]
    pub family_members: Vec<String>,
}
