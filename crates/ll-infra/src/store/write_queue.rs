//! Ordered store access.
//!
//! [`WriteQueue`] fronts any [`KeyValueStorePort`] with a single worker task.
//! Operations are enqueued synchronously when issued and applied one at a
//! time in issue order, so two writes to the same key always land in the
//! order they were made, whatever the latency of the underlying I/O.
//!
//! An operation that has been enqueued always runs. Dropping the
//! [`PendingOp`] only stops observing its outcome; failures nobody waits for
//! are logged.

use std::sync::Arc;

use async_trait::async_trait;
use ll_core::ports::{KeyValueStorePort, StoreError};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info_span, warn, Instrument};

type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
enum StoreCommand {
    Get {
        key: String,
        respond_to: Reply<Option<String>>,
    },
    Set {
        key: String,
        value: String,
        respond_to: Reply<()>,
    },
    Remove {
        key: String,
        respond_to: Reply<()>,
    },
    RemoveMany {
        keys: Vec<String>,
        respond_to: Reply<()>,
    },
    Clear {
        respond_to: Reply<()>,
    },
}

/// Outcome of an enqueued operation.
#[must_use = "the operation runs regardless; await `wait` to learn whether it succeeded"]
pub struct PendingOp<T> {
    receiver: Result<oneshot::Receiver<Result<T, StoreError>>, StoreError>,
}

impl<T> PendingOp<T> {
    pub async fn wait(self) -> Result<T, StoreError> {
        let receiver = self.receiver?;
        receiver
            .await
            .map_err(|_| StoreError::Unavailable("store worker dropped the operation".to_string()))?
    }
}

/// Handle to the store worker. Cheap to clone; the worker stops once every
/// handle is dropped and the queue has drained.
#[derive(Clone)]
pub struct WriteQueue {
    sender: mpsc::UnboundedSender<StoreCommand>,
}

impl WriteQueue {
    /// Start the worker on the current tokio runtime.
    pub fn spawn(backend: Arc<dyn KeyValueStorePort>) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = StoreWorker { receiver, backend };
        let handle = tokio::spawn(worker.run());
        (Self { sender }, handle)
    }

    fn submit<T>(&self, build: impl FnOnce(Reply<T>) -> StoreCommand) -> PendingOp<T> {
        let (respond_to, receiver) = oneshot::channel();
        let receiver = self
            .sender
            .send(build(respond_to))
            .map(|_| receiver)
            .map_err(|_| StoreError::Unavailable("store worker is not running".to_string()));
        PendingOp { receiver }
    }

    pub fn enqueue_get(&self, key: &str) -> PendingOp<Option<String>> {
        let key = key.to_string();
        self.submit(|respond_to| StoreCommand::Get { key, respond_to })
    }

    pub fn enqueue_set(&self, key: &str, value: &str) -> PendingOp<()> {
        let (key, value) = (key.to_string(), value.to_string());
        self.submit(|respond_to| StoreCommand::Set {
            key,
            value,
            respond_to,
        })
    }

    pub fn enqueue_remove(&self, key: &str) -> PendingOp<()> {
        let key = key.to_string();
        self.submit(|respond_to| StoreCommand::Remove { key, respond_to })
    }

    pub fn enqueue_remove_many(&self, keys: &[&str]) -> PendingOp<()> {
        let keys = keys.iter().map(|k| k.to_string()).collect();
        self.submit(|respond_to| StoreCommand::RemoveMany { keys, respond_to })
    }

    pub fn enqueue_clear(&self) -> PendingOp<()> {
        self.submit(|respond_to| StoreCommand::Clear { respond_to })
    }
}

#[async_trait]
impl KeyValueStorePort for WriteQueue {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.enqueue_get(key).wait().await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.enqueue_set(key, value).wait().await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.enqueue_remove(key).wait().await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.enqueue_remove_many(keys).wait().await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.enqueue_clear().wait().await
    }
}

struct StoreWorker {
    receiver: mpsc::UnboundedReceiver<StoreCommand>,
    backend: Arc<dyn KeyValueStorePort>,
}

impl StoreWorker {
    /// Run until every sender is gone and the queue is drained.
    async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            self.apply(command).await;
        }
        debug!("store worker stopped");
    }

    async fn apply(&self, command: StoreCommand) {
        match command {
            StoreCommand::Get { key, respond_to } => {
                let span = info_span!("infra.store.get", key = %key);
                let result = self.backend.get(&key).instrument(span).await;
                respond("get", respond_to, result);
            }
            StoreCommand::Set {
                key,
                value,
                respond_to,
            } => {
                let span = info_span!("infra.store.set", key = %key, bytes = value.len());
                let result = self.backend.set(&key, &value).instrument(span).await;
                respond("set", respond_to, result);
            }
            StoreCommand::Remove { key, respond_to } => {
                let span = info_span!("infra.store.remove", key = %key);
                let result = self.backend.remove(&key).instrument(span).await;
                respond("remove", respond_to, result);
            }
            StoreCommand::RemoveMany { keys, respond_to } => {
                let span = info_span!("infra.store.remove_many", keys = ?keys);
                let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
                let result = self.backend.remove_many(&refs).instrument(span).await;
                respond("remove_many", respond_to, result);
            }
            StoreCommand::Clear { respond_to } => {
                let span = info_span!("infra.store.clear");
                let result = self.backend.clear().instrument(span).await;
                respond("clear", respond_to, result);
            }
        }
    }
}

fn respond<T>(op: &'static str, respond_to: Reply<T>, result: Result<T, StoreError>) {
    if let Err(err) = &result {
        warn!(op, error = %err, "store operation failed");
    }

    match respond_to.send(result) {
        Ok(()) => {}
        Err(Ok(_)) => debug!(op, "store operation completed, caller no longer waiting"),
        Err(Err(err)) => error!(
            op,
            error = %err,
            "store operation failed and caller no longer waiting"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryKeyValueStore;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Backend whose writes take longer the earlier they are issued.
    struct SlowFirstBackend {
        inner: InMemoryKeyValueStore,
        delays: Mutex<Vec<Duration>>,
        completed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl KeyValueStorePort for SlowFirstBackend {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            let delay = self.delays.lock().unwrap().pop().unwrap_or_default();
            tokio::time::sleep(delay).await;
            self.inner.set(key, value).await?;
            self.completed.lock().unwrap().push(value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }

        async fn clear(&self) -> Result<(), StoreError> {
            self.inner.clear().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn writes_apply_in_issue_order_despite_latency() {
        let backend = Arc::new(SlowFirstBackend {
            inner: InMemoryKeyValueStore::new(),
            // popped from the end: first write waits 50ms, second 0ms
            delays: Mutex::new(vec![Duration::ZERO, Duration::from_millis(50)]),
            completed: Mutex::new(Vec::new()),
        });
        let (queue, _handle) = WriteQueue::spawn(backend.clone());

        let a = queue.enqueue_set("userData", "A");
        let b = queue.enqueue_set("userData", "B");
        let (b, a) = tokio::join!(b.wait(), a.wait());
        a.unwrap();
        b.unwrap();

        assert_eq!(*backend.completed.lock().unwrap(), ["A", "B"]);
        assert_eq!(queue.get("userData").await.unwrap().as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn dropped_pending_op_still_runs() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let (queue, _handle) = WriteQueue::spawn(backend.clone());

        drop(queue.enqueue_set("isOnboardingCompleted", "true"));

        assert_eq!(
            queue.get("isOnboardingCompleted").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            backend.get("isOnboardingCompleted").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn reads_observe_earlier_writes() {
        let (queue, _handle) = WriteQueue::spawn(Arc::new(InMemoryKeyValueStore::new()));

        let write = queue.enqueue_set("k", "v");
        let read = queue.enqueue_get("k");

        assert_eq!(read.wait().await.unwrap().as_deref(), Some("v"));
        write.wait().await.unwrap();
    }

    #[tokio::test]
    async fn remove_many_and_clear_go_through_the_queue() {
        let backend = Arc::new(InMemoryKeyValueStore::with_entries([
            ("a", "1"),
            ("b", "2"),
            ("c", "3"),
        ]));
        let (queue, _handle) = WriteQueue::spawn(backend.clone());

        queue.remove_many(&["a", "b"]).await.unwrap();
        assert_eq!(backend.len().await, 1);

        queue.clear().await.unwrap();
        assert!(backend.is_empty().await);
    }

    #[tokio::test]
    async fn worker_stops_when_handles_are_dropped() {
        let (queue, handle) = WriteQueue::spawn(Arc::new(InMemoryKeyValueStore::new()));
        queue.set("k", "v").await.unwrap();

        drop(queue);

        handle.await.unwrap();
    }
}
