use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kinesis::Client;
use aws_sdk_kinesis::primitives::Blob;
use tracing::info;

use crate::config::stream::StreamConfig;
use crate::stream::record_sink::RecordSink;

/// Kinesis-based implementation of [`RecordSink`].
///
/// ## Responsibilities
///
/// - Wraps each payload/key pair into a `PutRecord` call
/// - Targets a single named stream fixed at construction time
///
/// ## What this type does *not* do
///
/// - Validate the stream configuration (an empty stream name simply
///   fails at append time, service-side)
/// - Retry or buffer failed appends
/// - Load configuration from environment variables
///
/// Those concerns belong to higher layers — or are deliberately absent:
/// delivery is best-effort.
#[derive(Clone, Debug)]
pub struct KinesisRecordSink {
    client: Client,
    stream_name: String,
}

impl KinesisRecordSink {
    /// Constructs a sink from an already-built client.
    pub fn new(client: Client, stream_name: impl Into<String>) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
        }
    }

    /// Resolves shared AWS configuration and builds a sink for the
    /// configured stream.
    ///
    /// When the region is unset the SDK's own resolution chain applies.
    pub async fn connect(cfg: &StreamConfig) -> Self {
        info!(
            stream = %cfg.name,
            region = %cfg.region,
            "kinesis sink init"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if !cfg.region.is_empty() {
            loader = loader.region(Region::new(cfg.region.clone()));
        }
        let aws = loader.load().await;

        Self::new(Client::new(&aws), cfg.name.clone())
    }

    /// The stream this sink appends to.
    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

#[async_trait]
impl RecordSink for KinesisRecordSink {
    async fn put_record(&self, data: Vec<u8>, partition_key: String) -> Result<()> {
        self.client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await
            .context("kinesis PutRecord failed")?;
        Ok(())
    }
}
