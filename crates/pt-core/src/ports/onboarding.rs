//! Onboarding completion capability.
//!
//! Handed to the pet management screen while it is reached from onboarding.
//! Implementations persist the completion records first and flip the
//! in-memory completion flag last.

use async_trait::async_trait;
use thiserror::Error;

use super::persistence::StorageError;

#[derive(Debug, Error)]
pub enum CompleteOnboardingError {
    #[error("failed to persist has-launched flag")]
    PersistHasLaunched(#[source] StorageError),

    #[error("failed to persist stale-data flag")]
    PersistStaleData(#[source] StorageError),
}

#[async_trait]
pub trait OnboardingCompletion: Send + Sync {
    async fn complete(&self) -> Result<(), CompleteOnboardingError>;

    /// Current value of the in-memory completion flag.
    fn is_complete(&self) -> bool;
}
