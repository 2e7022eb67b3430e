use serde::{Deserialize, Serialize};

use crate::time::clock::Clock;

/// A Value Object describing one request that fell through to the 404
/// handler.
///
/// This type is intentionally **transport-agnostic**:
/// - It does not know about Kinesis, HTTP clients, or partition keys.
/// - It only describes *what* happened (who linked here, and when).
///
/// ### Wire shape
/// The JSON encoding is part of the service contract and is fixed as
///
/// ```json
/// {"referrer":"https://example.com/page","time":1700000000000}
/// ```
///
/// with exactly these two fields, in this order. `time` is wall-clock
/// milliseconds since the Unix epoch, captured at request-handling time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundEvent {
    /// The `Referer` URL supplied by the client, trusted without
    /// validation.
    pub referrer: String,

    /// Epoch milliseconds at which the request was handled.
    pub time: i64,
}

impl NotFoundEvent {
    /// Creates an event from raw parts.
    pub fn new(referrer: impl Into<String>, time: i64) -> Self {
        Self {
            referrer: referrer.into(),
            time,
        }
    }

    /// Captures an event for the given referrer at the clock's current
    /// time.
    ///
    /// Returns `None` when the referrer is empty: requests without a
    /// referrer produce no event at all.
    pub fn capture(referrer: &str, clock: &dyn Clock) -> Option<Self> {
        if referrer.is_empty() {
            return None;
        }
        Some(Self::new(referrer, clock.now_millis()))
    }
}
