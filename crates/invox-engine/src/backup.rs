//! Counter-gated backup rotation pipeline
//!
//! One call to [`run_backup_cycle`] per logical invoice-collection write:
//!
//! 1. Advance the persisted update counter through the injected
//!    [`BackupTriggerPolicy`]. The counter is persisted whether or not the
//!    gate opens.
//! 2. If the gate opened, capture the invoice collection. An empty or absent
//!    collection produces no snapshot and is not an error.
//! 3. Admit the snapshot: evict the oldest retained snapshot first when the
//!    store is at capacity, then append and bump the backup count.
//!
//! Failures here surface to the caller as errors, but the primary write that
//! preceded the cycle is never rolled back.

use invox_core::errors::{ErrorKind, LedgerError, Result};
use invox_core::model::{BackupSnapshot, InvoiceSet};
use invox_core::policy::{BackupTriggerPolicy, RetentionPolicy};
use invox_store::counters::{read_counter, write_counter};
use invox_store::{paths, DocumentStore, OrderDirection};

use crate::clock::Clock;

/// Run one full gate → capture → admit cycle for a completed write.
///
/// # Returns
/// The key of the admitted snapshot, or `None` when the gate stayed closed
/// or there was nothing to capture.
pub async fn run_backup_cycle(
    store: &dyn DocumentStore,
    trigger: &dyn BackupTriggerPolicy,
    retention: RetentionPolicy,
    clock: &dyn Clock,
) -> Result<Option<String>> {
    let counter = read_counter(store, paths::UPDATE_COUNT, 0).await?;
    let outcome = trigger.on_write(counter);
    write_counter(store, paths::UPDATE_COUNT, outcome.next_counter).await?;
    tracing::debug!(
        update_count = outcome.next_counter,
        triggers_backup = outcome.triggers_backup,
        "write gate evaluated"
    );

    if !outcome.triggers_backup {
        return Ok(None);
    }

    let Some(snapshot) = capture_snapshot(store, clock).await? else {
        tracing::info!("no invoice data to back up, skipping snapshot");
        return Ok(None);
    };

    let key = admit_snapshot(store, retention, &snapshot).await?;
    Ok(Some(key))
}

/// Capture the current invoice collection as a timestamped snapshot.
///
/// Returns `None` when the collection is absent or empty: the rotation never
/// stores empty snapshots.
pub async fn capture_snapshot(
    store: &dyn DocumentStore,
    clock: &dyn Clock,
) -> Result<Option<BackupSnapshot>> {
    let invoices: InvoiceSet = match store.get(paths::INVOICES).await? {
        None => return Ok(None),
        Some(value) => serde_json::from_value(value)?,
    };
    if invoices.is_empty() {
        return Ok(None);
    }
    Ok(Some(BackupSnapshot::new(clock.now_ms(), invoices)))
}

/// Admit a captured snapshot into the retained set, evicting first if the
/// store is at capacity.
///
/// A backup count that claims capacity while the eviction query finds no
/// snapshot is tolerated: the admission proceeds without a decrement and the
/// inconsistency is logged, never raised.
pub async fn admit_snapshot(
    store: &dyn DocumentStore,
    retention: RetentionPolicy,
    snapshot: &BackupSnapshot,
) -> Result<String> {
    let mut backup_count = read_counter(store, paths::BACKUP_COUNT, 0).await?;

    if retention.requires_eviction(backup_count) {
        let oldest = store
            .query_ordered(
                paths::INVOICE_BACKUPS,
                "timestamp",
                1,
                OrderDirection::Ascending,
            )
            .await?;
        match oldest.first() {
            Some((key, _)) => {
                store.remove(&paths::backup_snapshot(key)).await?;
                backup_count = backup_count.saturating_sub(1);
                write_counter(store, paths::BACKUP_COUNT, backup_count).await?;
                tracing::info!(key = %key, backup_count, "evicted oldest backup snapshot");
            }
            None => {
                let inconsistency = LedgerError::new(ErrorKind::InconsistentBackupCount)
                    .with_op("admit_snapshot")
                    .with_path(paths::INVOICE_BACKUPS)
                    .with_message(format!(
                        "backup count {} at capacity but no snapshot found to evict",
                        backup_count
                    ));
                tracing::warn!(error = %inconsistency, "tolerating inconsistent backup count");
            }
        }
    }

    let key = store
        .push(paths::INVOICE_BACKUPS, serde_json::to_value(snapshot)?)
        .await?;
    backup_count += 1;
    write_counter(store, paths::BACKUP_COUNT, backup_count).await?;
    tracing::info!(
        key = %key,
        backup_count,
        timestamp = snapshot.timestamp.as_millis(),
        invoice_count = snapshot.invoices.len(),
        "backup snapshot admitted"
    );
    Ok(key)
}
