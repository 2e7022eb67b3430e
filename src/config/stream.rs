//! # Stream Ingestion Configuration
//!
//! Configuration for the streaming ingestion target (stream name and
//! region).
//!
//! Both values are read once at startup. Their absence is deliberately
//! not a startup failure: the service keeps answering requests with an
//! effectively unusable (empty) ingestion configuration. Callers that
//! care should check [`StreamConfig::is_valid`] and log accordingly.
//!
//! # Examples
//! ```rust,no_run
//! use deadlink_web::config::stream::StreamConfig;
//!
//! let cfg = StreamConfig::from_env();
//! if !cfg.is_valid() {
//!     eprintln!("stream configuration incomplete");
//! }
//! ```

use std::env;

/// Stream ingestion configuration.
///
/// Reads from environment variables:
/// - `KINESIS_STREAM_NAME` — target stream for emitted events
/// - `AWS_REGION` — region of the ingestion service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Name of the target stream. Empty when unconfigured.
    pub name: String,
    /// Region of the ingestion service. Empty when unconfigured.
    pub region: String,
}

impl StreamConfig {
    /// Builds a [`StreamConfig`] from environment variables.
    ///
    /// Missing variables yield empty strings rather than errors.
    pub fn from_env() -> Self {
        Self {
            name: env::var("KINESIS_STREAM_NAME").unwrap_or_default(),
            region: env::var("AWS_REGION").unwrap_or_default(),
        }
    }

    /// Returns `true` if both the stream name and the region are present.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.region.is_empty()
    }
}
