//! Monotonic, time-based user id generator.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use sharebox_core::traits::IdGenerator;

/// Smallest id this generator hands out. Everything below is reserved.
const FIRST_FREE_ID: u64 = 2;

/// Generates ids from the current time in microseconds.
///
/// Ids are strictly increasing within a process even when the clock stalls
/// or steps backwards.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicU64,
}

impl TimestampIdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn gen_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_micros())
            .unwrap_or(0)
            .max(FIRST_FREE_ID);

        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}
