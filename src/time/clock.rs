/// A port that provides the **current wall-clock time** for the
/// application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - Time is expressed as milliseconds since the Unix epoch, matching the
///   wire format of the emitted events.
/// - This trait represents an **external capability**, similar to a
///   Repository or a record sink.
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current time as milliseconds since the Unix epoch.
    ///
    /// Implementations decide how "now" is determined
    /// (e.g. system time, fixed value, mocked time source).
    fn now_millis(&self) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test implementation of `Clock` that always returns a fixed instant.
    struct FixedClock {
        millis: i64,
    }

    impl FixedClock {
        fn new(millis: i64) -> Self {
            Self { millis }
        }
    }

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.millis
        }
    }

    #[test]
    fn fixed_clock_returns_given_instant() {
        let clock = FixedClock::new(1_700_000_000_000);

        assert_eq!(clock.now_millis(), 1_700_000_000_000);
    }

    #[test]
    fn clock_trait_object_works() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(42));

        assert_eq!(clock.now_millis(), 42);
    }
}
