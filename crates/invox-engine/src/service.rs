//! The ledger service: public operation surface over the document store
//!
//! Every invoice-collection write runs the backup cycle afterwards; a backup
//! failure surfaces as the operation's error, but the primary write it
//! followed is already durable and is never rolled back.

use std::sync::Arc;

use invox_core::errors::{ErrorKind, LedgerError, Result};
use invox_core::model::{BackupSnapshot, InvoiceDraft, InvoiceSet};
use invox_core::policy::{BackupTriggerPolicy, ModularTriggerPolicy, RetentionPolicy};
use invox_core::render::render_csv;
use invox_core_types::RequestContext;
use invox_store::counters::{read_counter, write_counter};
use invox_store::{paths, DocumentStore};

use crate::backup;
use crate::clock::{Clock, SystemClock};

/// Default next-invoice-number for a fresh ledger
const FIRST_INVOICE_NUMBER: u64 = 1001;

/// Invoice ledger operations over an injected [`DocumentStore`]
///
/// Construction takes the store; the trigger policy, retention policy, and
/// clock default to production values and can be overridden with the
/// builder-style `with_*` methods (tests use these to install small
/// capacities, always/never gates, and a manual clock).
pub struct LedgerService {
    store: Arc<dyn DocumentStore>,
    trigger: Arc<dyn BackupTriggerPolicy>,
    retention: RetentionPolicy,
    clock: Arc<dyn Clock>,
}

impl LedgerService {
    /// Create a service with production defaults: backup every 5th write,
    /// retain at most 15 snapshots, wall-clock timestamps.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            trigger: Arc::new(ModularTriggerPolicy::default()),
            retention: RetentionPolicy::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the write-gate policy
    pub fn with_trigger_policy(mut self, trigger: Arc<dyn BackupTriggerPolicy>) -> Self {
        self.trigger = trigger;
        self
    }

    /// Override the retention policy
    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    /// Override the snapshot clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Record one invoice, appending it to the collection under a
    /// store-assigned key, then run the backup cycle.
    ///
    /// Transient editor fields are stripped here; they never reach the store.
    pub async fn record_invoice(&self, draft: InvoiceDraft) -> Result<String> {
        let ctx = RequestContext::new();
        let record = draft.into_record();
        let key = self
            .store
            .push(paths::INVOICES, serde_json::to_value(&record)?)
            .await
            .map_err(|e| e.with_request_id(ctx.request_id.clone()))?;
        tracing::info!(
            request_id = %ctx.request_id,
            key = %key,
            invoice_number = record.invoice_number,
            "invoice recorded"
        );

        self.run_backup_cycle()
            .await
            .map_err(|e| e.with_request_id(ctx.request_id))?;
        Ok(key)
    }

    /// Replace the whole invoice collection, then run the backup cycle.
    ///
    /// An empty mapping is rejected before anything is written: a caller bug
    /// must not wipe the ledger.
    pub async fn replace_all_invoices(&self, invoices: InvoiceSet) -> Result<()> {
        if invoices.is_empty() {
            return Err(LedgerError::new(ErrorKind::InvalidInput)
                .with_op("replace_all_invoices")
                .with_path(paths::INVOICES)
                .with_message("refusing to replace the invoice collection with an empty mapping"));
        }
        let ctx = RequestContext::new();
        self.store
            .set(paths::INVOICES, serde_json::to_value(&invoices)?)
            .await
            .map_err(|e| e.with_request_id(ctx.request_id.clone()))?;
        tracing::info!(
            request_id = %ctx.request_id,
            invoice_count = invoices.len(),
            "invoice collection replaced"
        );

        self.run_backup_cycle()
            .await
            .map_err(|e| e.with_request_id(ctx.request_id))?;
        Ok(())
    }

    /// The current invoice collection (empty if none has been written)
    pub async fn invoices(&self) -> Result<InvoiceSet> {
        match self.store.get(paths::INVOICES).await? {
            None => Ok(InvoiceSet::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    /// Peek at the next invoice number without consuming it
    pub async fn next_invoice_number(&self) -> Result<u64> {
        read_counter(self.store.as_ref(), paths::INVOICE_NUMBER, FIRST_INVOICE_NUMBER).await
    }

    /// Consume the current invoice number and return the incremented one
    pub async fn issue_invoice_number(&self) -> Result<u64> {
        let current =
            read_counter(self.store.as_ref(), paths::INVOICE_NUMBER, FIRST_INVOICE_NUMBER).await?;
        let next = current + 1;
        write_counter(self.store.as_ref(), paths::INVOICE_NUMBER, next).await?;
        tracing::debug!(invoice_number = next, "invoice number issued");
        Ok(next)
    }

    /// Render the invoice collection as CSV
    ///
    /// Fails with [`ErrorKind::MissingInvoiceData`] when there are no
    /// invoices to export.
    pub async fn export_csv(&self) -> Result<String> {
        let invoices = self.invoices().await?;
        render_csv(&invoices)
    }

    /// All retained backup snapshots, oldest first
    pub async fn list_backups(&self) -> Result<Vec<(String, BackupSnapshot)>> {
        let children = self
            .store
            .query_ordered(
                paths::INVOICE_BACKUPS,
                "timestamp",
                usize::MAX,
                invox_store::OrderDirection::Ascending,
            )
            .await?;
        children
            .into_iter()
            .map(|(key, value)| Ok((key, serde_json::from_value(value)?)))
            .collect()
    }

    /// Replace the invoice collection with the contents of a retained
    /// snapshot. The snapshot itself is left untouched.
    pub async fn restore_snapshot(&self, key: &str) -> Result<()> {
        let path = paths::backup_snapshot(key);
        let value = self.store.get(&path).await?.ok_or_else(|| {
            LedgerError::new(ErrorKind::NotFound)
                .with_op("restore_snapshot")
                .with_path(&path)
                .with_key(key)
                .with_message("no backup snapshot under this key")
        })?;
        let snapshot: BackupSnapshot = serde_json::from_value(value)?;

        self.store
            .set(paths::INVOICES, serde_json::to_value(&snapshot.invoices)?)
            .await?;
        tracing::info!(
            key = %key,
            invoice_count = snapshot.invoices.len(),
            "invoice collection restored from snapshot"
        );
        Ok(())
    }

    async fn run_backup_cycle(&self) -> Result<()> {
        backup::run_backup_cycle(
            self.store.as_ref(),
            self.trigger.as_ref(),
            self.retention,
            self.clock.as_ref(),
        )
        .await?;
        Ok(())
    }
}
