use chrono::Utc;

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current time, in epoch milliseconds, based
/// on the operating system's UTC clock.
///
/// # Responsibility
/// - Constructing the clock is the responsibility of the **composition
///   root** (e.g. `main.rs`).
/// - Application and domain logic should treat `Clock` as a trusted
///   source.
#[derive(Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new [`SystemClock`].
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
