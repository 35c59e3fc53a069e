use pt_core::persistence::{encode_pets, encode_user, StorageKey};
use pt_core::state::DurableSlice;
use tracing::{trace, warn};

use crate::store::{StateObserver, Transition};

use super::WriteQueue;

/// Mirrors the durable slice of each committed transition to storage.
///
/// The write is queued, never awaited by the dispatcher. Failures are logged
/// by the writer and never roll back the in-memory state.
#[derive(Debug)]
pub struct EffectRunner {
    queue: WriteQueue,
}

impl EffectRunner {
    pub fn new(queue: WriteQueue) -> Self {
        Self { queue }
    }
}

impl StateObserver for EffectRunner {
    fn on_transition(&mut self, transition: Transition<'_>) {
        let Some(slice) = transition.action.durable_slice() else {
            trace!(action = transition.action.name(), "session-only action, nothing to persist");
            return;
        };

        let encoded = match slice {
            DurableSlice::User => match &transition.state.user {
                Some(user) => encode_user(user).map(|blob| (StorageKey::User, blob)),
                None => return,
            },
            // Written even when nothing matched, so the record always equals memory.
            DurableSlice::Pets => {
                encode_pets(&transition.state.pets).map(|blob| (StorageKey::Pets, blob))
            }
        };

        match encoded {
            Ok((key, blob)) => {
                let seq = self.queue.enqueue(key, blob);
                trace!(action = transition.action.name(), %key, seq, "write queued");
            }
            Err(err) => warn!(
                action = transition.action.name(),
                error = %err,
                "failed to encode durable record"
            ),
        }
    }
}
