use std::sync::Arc;

use futures::future::join3;
use pt_core::model::{Pet, User};
use pt_core::onboarding::{LaunchSnapshot, OnboardingGate};
use pt_core::persistence::{decode_pets, decode_user, flag_is_true, StorageKey};
use pt_core::ports::{LoadingIndicatorPort, PersistenceGatewayPort, StorageError};
use pt_core::state::AppAction;
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

use crate::store::StateStore;

/// What the launch sequence found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LaunchOutcome {
    pub onboarding_complete: bool,
    pub user_loaded: bool,
    pub pets_loaded: usize,
    pub wiped_stale: bool,
}

/// Startup sequence: optional stale wipe, concurrent reads, gate, hydration.
///
/// Never fails. Unreadable or undecodable records count as absent.
pub struct InitializationLoader {
    gateway: Arc<dyn PersistenceGatewayPort>,
    loading: Arc<dyn LoadingIndicatorPort>,
}

impl InitializationLoader {
    pub fn new(
        gateway: Arc<dyn PersistenceGatewayPort>,
        loading: Arc<dyn LoadingIndicatorPort>,
    ) -> Self {
        Self { gateway, loading }
    }

    pub async fn execute(&self, store: &mut StateStore) -> LaunchOutcome {
        let span = info_span!("usecase.initialize.execute");
        async {
            self.loading.show();
            let outcome = self.load(store).await;
            self.loading.clear();

            info!(
                onboarding_complete = outcome.onboarding_complete,
                user_loaded = outcome.user_loaded,
                pets_loaded = outcome.pets_loaded,
                wiped_stale = outcome.wiped_stale,
                "launch sequence finished"
            );
            outcome
        }
        .instrument(span)
        .await
    }

    async fn load(&self, store: &mut StateStore) -> LaunchOutcome {
        let stale = self.check_stale().await;
        let wiped_stale = stale == StaleCheck::Wiped;

        let (snapshot, reads_failed) = if wiped_stale {
            (LaunchSnapshot::default(), false)
        } else {
            self.read_snapshot().await
        };
        // Any failed read leaves the gate closed, including the stale-flag read.
        let read_failed = reads_failed || stale == StaleCheck::Unreadable;
        let onboarding_complete = !read_failed && OnboardingGate::is_complete(&snapshot);

        let user_loaded = snapshot.user.is_some();
        let pets = snapshot.pets.unwrap_or_default();
        let pets_loaded = pets.len();

        if let Some(user) = snapshot.user {
            store.dispatch(AppAction::SetUser(user));
        }
        for pet in pets {
            store.dispatch(AppAction::AddPet(pet));
        }

        LaunchOutcome {
            onboarding_complete,
            user_loaded,
            pets_loaded,
            wiped_stale,
        }
    }

    /// Reads the stale-data flag and wipes the onboarding records when set.
    async fn check_stale(&self) -> StaleCheck {
        let stale = match self.gateway.get(StorageKey::StaleData).await {
            Ok(value) => flag_is_true(value.as_deref()),
            Err(err) => {
                warn!(error = %err, "failed to read stale-data flag; onboarding stays open");
                return StaleCheck::Unreadable;
            }
        };
        if !stale {
            return StaleCheck::Fresh;
        }

        match self
            .gateway
            .multi_remove(&StorageKey::ONBOARDING_RECORDS)
            .await
        {
            Ok(()) => info!("stale data cleared"),
            Err(err) => warn!(error = %err, "failed to clear stale data"),
        }
        StaleCheck::Wiped
    }

    /// Returns the snapshot and whether any of the three reads failed.
    async fn read_snapshot(&self) -> (LaunchSnapshot, bool) {
        let (has_launched, user, pets) = join3(
            self.gateway.get(StorageKey::HasLaunched),
            self.gateway.get(StorageKey::User),
            self.gateway.get(StorageKey::Pets),
        )
        .await;
        let failed = has_launched.is_err() || user.is_err() || pets.is_err();

        let snapshot = LaunchSnapshot {
            has_launched: read_or_absent(StorageKey::HasLaunched, has_launched),
            user: read_or_absent(StorageKey::User, user).and_then(|blob| decode_or_absent_user(&blob)),
            pets: read_or_absent(StorageKey::Pets, pets).and_then(|blob| decode_or_absent_pets(&blob)),
        };
        (snapshot, failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StaleCheck {
    Fresh,
    Wiped,
    Unreadable,
}

fn read_or_absent(key: StorageKey, result: Result<Option<String>, StorageError>) -> Option<String> {
    result.unwrap_or_else(|err| {
        warn!(%key, error = %err, "record read failed; treating as absent");
        None
    })
}

fn decode_or_absent_user(blob: &str) -> Option<User> {
    decode_user(blob)
        .map_err(|err| warn!(error = %err, "stored user is unreadable; treating as absent"))
        .ok()
}

fn decode_or_absent_pets(blob: &str) -> Option<Vec<Pet>> {
    decode_pets(blob)
        .map_err(|err| warn!(error = %err, "stored pets are unreadable; treating as absent"))
        .ok()
}
