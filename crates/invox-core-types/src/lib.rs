//! Invox Core Types - Shared primitive types
//!
//! Foundational types used across all invox crates:
//! - Correlation types (RequestId, TraceId, RequestContext) for operation tracking
//! - TimestampMs for wall-clock millisecond timestamps on backup snapshots

pub mod correlation;
pub mod time;

pub use correlation::{RequestContext, RequestId, TraceId};
pub use time::TimestampMs;
