use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide source of partition keys.
///
/// # Overview
/// Wraps a pseudo-random generator seeded once at construction. Every
/// emission task draws one key per record; keys carry no data locality —
/// they only spread records across the stream's partitions.
///
/// Keys are non-negative 63-bit integers rendered as decimal strings.
///
/// # Thread safety
/// [`StdRng`] is not shareable by itself, so draws go through a `Mutex`.
/// The critical section is a single draw.
pub struct PartitionKeySource {
    rng: Mutex<StdRng>,
}

impl PartitionKeySource {
    /// Seeds the generator from the current wall-clock time.
    ///
    /// This is the production constructor, called once at startup.
    pub fn seeded_from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Seeds the generator deterministically.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws the next partition key.
    pub fn next_key(&self) -> String {
        let n: i64 = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..i64::MAX);
        n.to_string()
    }
}
