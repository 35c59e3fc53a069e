/// Keys of the durable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON-encoded [`crate::model::User`].
    User,
    /// JSON array of [`crate::model::Pet`].
    Pets,
    /// `"true"` once onboarding finished; absent otherwise.
    HasLaunched,
    /// `"true"` forces a wipe of the onboarding records on next launch.
    StaleData,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::User,
        StorageKey::Pets,
        StorageKey::HasLaunched,
        StorageKey::StaleData,
    ];

    /// Records removed together by the stale-data wipe.
    pub const ONBOARDING_RECORDS: [StorageKey; 3] =
        [StorageKey::HasLaunched, StorageKey::User, StorageKey::Pets];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "@pet_thoughts_user",
            Self::Pets => "@pet_thoughts_pets",
            Self::HasLaunched => "@has_launched",
            Self::StaleData => "@stale_data",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
