//! Time seam for snapshot capture
//!
//! Snapshots are ordered (and evicted) by capture timestamp, so the engine
//! never reads the wall clock directly. Production wires [`SystemClock`];
//! tests wire [`ManualClock`] to make eviction order deterministic.

use std::sync::atomic::{AtomicI64, Ordering};

use invox_core_types::TimestampMs;

/// Source of capture timestamps
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> TimestampMs;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        TimestampMs::now()
    }
}

/// Deterministic clock for tests
///
/// Every read returns a strictly increasing value (the stored time, which is
/// then advanced by one millisecond), so two captures in the same test can
/// never collide on timestamp. Use [`ManualClock::advance`] to create larger
/// gaps.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    /// Start the clock at `start_millis`
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(start_millis),
        }
    }

    /// Move the clock forward by `delta_millis`
    pub fn advance(&self, delta_millis: i64) {
        self.millis.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        TimestampMs::from_millis(self.millis.fetch_add(1, Ordering::SeqCst))
    }
}
