use invox_core_types::TimestampMs;
use serde::{Deserialize, Serialize};

use super::invoice::InvoiceSet;

/// A timestamped full copy of the invoice collection, retained for recovery
///
/// Snapshots are immutable once created and are destroyed only by eviction.
/// Identity is the store-assigned key under `invoice-backups`; eviction
/// ordering is by `timestamp`, not by key (keys only break timestamp ties,
/// deterministically, because the store assigns them in creation order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    /// Capture time, milliseconds since epoch
    pub timestamp: TimestampMs,
    /// Full invoice collection at capture time
    pub invoices: InvoiceSet,
}

impl BackupSnapshot {
    /// Build a snapshot of the given collection at the given time
    pub fn new(timestamp: TimestampMs, invoices: InvoiceSet) -> Self {
        Self {
            timestamp,
            invoices,
        }
    }
}
