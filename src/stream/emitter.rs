use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::error;

use crate::error::encode::EncodeError;
use crate::event::not_found::NotFoundEvent;
use crate::stream::partition::PartitionKeySource;
use crate::stream::record_sink::RecordSink;

/// Emits not-found events to the configured [`RecordSink`].
///
/// # Overview
/// One detached append attempt per event: no retry, no batching, no
/// ordering across events, no back-pressure. Once scheduled, a task
/// cannot be cancelled or awaited by the request path; process shutdown
/// may abandon in-flight appends.
///
/// # Responsibilities
/// - Encode the event to its JSON wire shape
/// - Draw a partition key
/// - Spawn the single background append, logging any failure
///
/// ## What this type does *not* do
/// - Decide whether an event *should* be emitted (the capture rule lives
///   on [`NotFoundEvent`])
/// - Load configuration or construct sinks
#[derive(Clone)]
pub struct EventEmitter {
    sink: Arc<dyn RecordSink>,
    keys: Arc<PartitionKeySource>,
}

impl EventEmitter {
    /// Constructs a new `EventEmitter` over the given sink and key source.
    pub fn new(sink: Arc<dyn RecordSink>, keys: PartitionKeySource) -> Self {
        Self {
            sink,
            keys: Arc::new(keys),
        }
    }

    /// Encodes the event and schedules a single background append.
    ///
    /// Returns the handle of the spawned task so that tests can await
    /// completion; callers on the request path drop it.
    ///
    /// # Errors
    /// [`EncodeError`] when the event cannot be encoded — nothing is
    /// scheduled in that case. Append failures never surface here: they
    /// are logged inside the spawned task.
    pub fn emit(&self, event: NotFoundEvent) -> Result<JoinHandle<()>, EncodeError> {
        let payload = serde_json::to_vec(&event)?;
        let partition_key = self.keys.next_key();
        let sink = Arc::clone(&self.sink);

        Ok(tokio::spawn(async move {
            if let Err(err) = sink.put_record(payload, partition_key).await {
                error!(error = %err, "unable to append record to stream");
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<(Vec<u8>, String)>>,
    }

    #[async_trait]
    impl RecordSink for RecordingSink {
        async fn put_record(&self, data: Vec<u8>, partition_key: String) -> Result<()> {
            self.records.lock().unwrap().push((data, partition_key));
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl RecordSink for FailingSink {
        async fn put_record(&self, _data: Vec<u8>, _partition_key: String) -> Result<()> {
            Err(anyhow!("stream unavailable"))
        }
    }

    fn emitter_over(sink: Arc<dyn RecordSink>) -> EventEmitter {
        EventEmitter::new(sink, PartitionKeySource::with_seed(7))
    }

    #[tokio::test]
    async fn emit_appends_encoded_event_with_partition_key() {
        let sink = Arc::new(RecordingSink::default());
        let emitter = emitter_over(sink.clone());

        let event = NotFoundEvent::new("https://example.com/page", 1_700_000_000_000);

        let handle = emitter.emit(event.clone()).expect("emit should schedule");
        handle.await.expect("append task should run to completion");

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);

        let decoded: NotFoundEvent =
            serde_json::from_slice(&records[0].0).expect("payload should decode");
        assert_eq!(decoded, event);

        let key: i64 = records[0].1.parse().expect("key should be an integer");
        assert!(key >= 0);
    }

    #[tokio::test]
    async fn each_emit_is_an_independent_attempt() {
        let sink = Arc::new(RecordingSink::default());
        let emitter = emitter_over(sink.clone());

        let first = emitter
            .emit(NotFoundEvent::new("https://example.com/a", 1))
            .unwrap();
        let second = emitter
            .emit(NotFoundEvent::new("https://example.com/b", 2))
            .unwrap();
        first.await.unwrap();
        second.await.unwrap();

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn append_failure_is_swallowed_by_the_task() {
        let emitter = emitter_over(Arc::new(FailingSink));

        let handle = emitter
            .emit(NotFoundEvent::new("https://example.com/page", 1))
            .expect("emit should still schedule");

        // The task logs the failure and finishes without panicking.
        handle.await.expect("append task should not panic");
    }
}
