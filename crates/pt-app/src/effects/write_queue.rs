use std::collections::HashMap;
use std::sync::Arc;

use pt_core::persistence::StorageKey;
use pt_core::ports::PersistenceGatewayPort;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

#[derive(Debug)]
struct PendingWrite {
    key: StorageKey,
    seq: u64,
    value: String,
}

#[derive(Debug)]
enum WriteMessage {
    Write(PendingWrite),
    Flush(oneshot::Sender<()>),
}

/// Producer side of the serialized writer.
///
/// Stamps every write with a per-key sequence number. The writer applies a
/// key's writes in sequence order and, when several writes for one key are
/// queued at once, applies only the newest.
#[derive(Debug)]
pub struct WriteQueue {
    tx: mpsc::UnboundedSender<WriteMessage>,
    sequences: HashMap<StorageKey, u64>,
}

/// Cloneable handle used to wait for the queue to drain.
#[derive(Debug, Clone)]
pub struct WriteFlusher {
    tx: mpsc::UnboundedSender<WriteMessage>,
}

impl WriteQueue {
    /// Spawns the writer task on the current tokio runtime.
    pub fn spawn(gateway: Arc<dyn PersistenceGatewayPort>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(
            run_writer(rx, gateway).instrument(info_span!("effects.write_queue")),
        );
        (
            Self {
                tx,
                sequences: HashMap::new(),
            },
            worker,
        )
    }

    /// Queues a write and returns its sequence number. Never blocks.
    pub fn enqueue(&mut self, key: StorageKey, value: String) -> u64 {
        let seq = self.sequences.entry(key).or_insert(0);
        *seq += 1;
        let seq = *seq;

        if self
            .tx
            .send(WriteMessage::Write(PendingWrite { key, seq, value }))
            .is_err()
        {
            warn!(%key, seq, "writer stopped; write dropped");
        }
        seq
    }

    pub fn flusher(&self) -> WriteFlusher {
        WriteFlusher {
            tx: self.tx.clone(),
        }
    }
}

impl WriteFlusher {
    /// Resolves once every write queued before this call has been attempted.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteMessage::Flush(done_tx)).is_err() {
            return;
        }
        // A dropped sender means the writer exited, which also drains the queue.
        let _ = done_rx.await;
    }
}

async fn run_writer(
    mut rx: mpsc::UnboundedReceiver<WriteMessage>,
    gateway: Arc<dyn PersistenceGatewayPort>,
) {
    let mut applied: HashMap<StorageKey, u64> = HashMap::new();

    while let Some(first) = rx.recv().await {
        let mut batch = vec![first];
        while let Ok(next) = rx.try_recv() {
            batch.push(next);
        }

        let mut writes: Vec<PendingWrite> = Vec::new();
        let mut waiters = Vec::new();
        for message in batch {
            match message {
                WriteMessage::Write(write) => {
                    match writes.iter_mut().find(|queued| queued.key == write.key) {
                        Some(queued) if write.seq > queued.seq => {
                            debug!(key = %write.key, dropped = queued.seq, kept = write.seq, "superseded queued write");
                            *queued = write;
                        }
                        Some(_) => {}
                        None => writes.push(write),
                    }
                }
                WriteMessage::Flush(waiter) => waiters.push(waiter),
            }
        }

        for write in writes {
            if applied.get(&write.key).is_some_and(|last| *last >= write.seq) {
                debug!(key = %write.key, seq = write.seq, "stale write skipped");
                continue;
            }
            match gateway.set(write.key, &write.value).await {
                Ok(()) => debug!(key = %write.key, seq = write.seq, "record written"),
                Err(err) => warn!(key = %write.key, seq = write.seq, error = %err, "record write failed"),
            }
            applied.insert(write.key, write.seq);
        }

        for waiter in waiters {
            let _ = waiter.send(());
        }
    }

    debug!("write queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pt_core::ports::StorageError;

    #[derive(Default)]
    struct RecordingGateway {
        sets: Mutex<Vec<(StorageKey, String)>>,
        fail_key: Option<StorageKey>,
    }

    #[async_trait]
    impl PersistenceGatewayPort for RecordingGateway {
        async fn get(&self, _key: StorageKey) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
            if self.fail_key == Some(key) {
                return Err(StorageError::Write {
                    key,
                    reason: "injected".to_string(),
                });
            }
            self.sets.lock().unwrap().push((key, value.to_string()));
            Ok(())
        }

        async fn multi_remove(&self, _keys: &[StorageKey]) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn sequence_numbers_are_per_key() {
        let gateway = Arc::new(RecordingGateway::default());
        let (mut queue, _worker) = WriteQueue::spawn(gateway);

        assert_eq!(queue.enqueue(StorageKey::Pets, "[]".to_string()), 1);
        assert_eq!(queue.enqueue(StorageKey::Pets, "[]".to_string()), 2);
        assert_eq!(queue.enqueue(StorageKey::User, "{}".to_string()), 1);
    }

    #[tokio::test]
    async fn queued_writes_for_one_key_collapse_to_the_newest() {
        let gateway = Arc::new(RecordingGateway::default());
        let (mut queue, _worker) = WriteQueue::spawn(gateway.clone());

        // Nothing runs on the current-thread runtime until the first await,
        // so all three writes are queued together.
        queue.enqueue(StorageKey::Pets, "[1]".to_string());
        queue.enqueue(StorageKey::User, "{}".to_string());
        queue.enqueue(StorageKey::Pets, "[1,2]".to_string());
        queue.flusher().flush().await;

        let sets = gateway.sets.lock().unwrap().clone();
        assert_eq!(
            sets,
            vec![
                (StorageKey::Pets, "[1,2]".to_string()),
                (StorageKey::User, "{}".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn flushed_writes_land_in_dispatch_order() {
        let gateway = Arc::new(RecordingGateway::default());
        let (mut queue, _worker) = WriteQueue::spawn(gateway.clone());
        let flusher = queue.flusher();

        for value in ["[1]", "[1,2]", "[1,2,3]"] {
            queue.enqueue(StorageKey::Pets, value.to_string());
            flusher.flush().await;
        }

        let values: Vec<String> = gateway
            .sets
            .lock()
            .unwrap()
            .iter()
            .map(|(_, value)| value.clone())
            .collect();
        assert_eq!(values, vec!["[1]", "[1,2]", "[1,2,3]"]);
    }

    #[tokio::test]
    async fn failed_write_does_not_stop_the_writer() {
        let gateway = Arc::new(RecordingGateway {
            fail_key: Some(StorageKey::User),
            ..Default::default()
        });
        let (mut queue, _worker) = WriteQueue::spawn(gateway.clone());

        queue.enqueue(StorageKey::User, "{}".to_string());
        queue.enqueue(StorageKey::Pets, "[]".to_string());
        queue.flusher().flush().await;

        assert_eq!(
            gateway.sets.lock().unwrap().clone(),
            vec![(StorageKey::Pets, "[]".to_string())]
        );
    }

    #[tokio::test]
    async fn dropping_the_queue_stops_the_writer_after_draining() {
        let gateway = Arc::new(RecordingGateway::default());
        let (mut queue, worker) = WriteQueue::spawn(gateway.clone());

        queue.enqueue(StorageKey::Pets, "[]".to_string());
        drop(queue);
        worker.await.unwrap();

        assert_eq!(gateway.sets.lock().unwrap().len(), 1);
    }
}
