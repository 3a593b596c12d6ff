//! Wall-clock millisecond timestamps
//!
//! Backup snapshots are ordered oldest-first by their capture timestamp.
//! `TimestampMs` is the canonical representation: integer milliseconds since
//! the Unix epoch. Ordering by timestamp matching creation order assumes the
//! clock does not go backward between captures; that is a documented
//! assumption of the rotation scheme, not an enforced invariant.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TimestampMs(i64);

impl TimestampMs {
    /// Capture the current wall-clock time
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Construct from raw milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw millisecond value
    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TimestampMs {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_positive() {
        let ts = TimestampMs::now();
        assert!(ts.as_millis() > 0);
    }

    #[test]
    fn test_ordering_by_millis() {
        let older = TimestampMs::from_millis(1_000);
        let newer = TimestampMs::from_millis(2_000);
        assert!(older < newer);
    }

    #[test]
    fn test_serde_transparent() {
        let ts = TimestampMs::from_millis(1234);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1234");

        let back: TimestampMs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
