use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pt_core::persistence::{StorageKey, FLAG_FALSE, FLAG_TRUE};
use pt_core::ports::{CompleteOnboardingError, OnboardingCompletion, PersistenceGatewayPort};
use tracing::{info, info_span, warn, Instrument};

/// Completion capability handed to the onboarding pet management screen.
///
/// Persists has-launched, then clears the stale-data flag, then flips the
/// in-memory completion flag. If either write fails the flag stays unset and
/// the user remains in the onboarding graph.
pub struct CompleteOnboarding {
    gateway: Arc<dyn PersistenceGatewayPort>,
    completed: AtomicBool,
}

impl CompleteOnboarding {
    pub fn new(gateway: Arc<dyn PersistenceGatewayPort>, already_complete: bool) -> Self {
        Self {
            gateway,
            completed: AtomicBool::new(already_complete),
        }
    }
}

#[async_trait]
impl OnboardingCompletion for CompleteOnboarding {
    async fn complete(&self) -> Result<(), CompleteOnboardingError> {
        let span = info_span!("usecase.complete_onboarding.execute");
        async {
            self.gateway
                .set(StorageKey::HasLaunched, FLAG_TRUE)
                .await
                .map_err(|err| {
                    warn!(error = %err, "failed to persist has-launched flag");
                    CompleteOnboardingError::PersistHasLaunched(err)
                })?;

            self.gateway
                .set(StorageKey::StaleData, FLAG_FALSE)
                .await
                .map_err(|err| {
                    warn!(error = %err, "failed to persist stale-data flag");
                    CompleteOnboardingError::PersistStaleData(err)
                })?;

            self.completed.store(true, Ordering::SeqCst);
            info!("onboarding completed");
            Ok(())
        }
        .instrument(span)
        .await
    }

    fn is_complete(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}
