use anyhow::Result;
use async_trait::async_trait;

/// Port trait for appending records to a streaming ingestion service.
///
/// This trait represents an **abstraction over stream intake mechanisms**.
/// Implementations may append records via:
///
/// - AWS Kinesis
/// - In-memory collectors (for development / testing)
/// - Other streaming services (Kafka, Pub/Sub, etc.)
///
/// ## Design notes
///
/// - This trait is intentionally **minimal**:
///   - It accepts an opaque byte payload and a partition key
///   - It returns a generic `Result<()>`
///
/// - The trait does **not**:
///   - Interpret the payload
///   - Choose partition keys
///   - Retry, batch, or reorder records
///
/// Those concerns belong to the emission layer (or are explicitly
/// out of contract — delivery is best-effort).
///
/// ## Thread safety
///
/// Implementations must be:
/// - `Send`: usable across thread boundaries
/// - `Sync`: safely shared via `Arc`
///
/// This allows a `RecordSink` to be injected into async runtimes and
/// drawn on by many detached emission tasks at once.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Appends a single record to the stream.
    ///
    /// ## Arguments
    ///
    /// - `data`: Opaque payload bytes.
    /// - `partition_key`: Key used by the service to distribute records
    ///   across its internal partitions.
    ///
    /// ## Returns
    ///
    /// - `Ok(())` if the record was accepted by the service
    /// - `Err(_)` if the append failed for any reason
    ///
    /// ## Error handling
    ///
    /// Failures are **delivery errors**: callers log them and move on.
    /// Nothing in this contract implies a retry.
    async fn put_record(&self, data: Vec<u8>, partition_key: String) -> Result<()>;
}
