//! Domain models for the invoice ledger

pub mod invoice;
pub mod snapshot;

pub use invoice::{BillInfo, DraftLineItem, Invoice, InvoiceDraft, InvoiceSet, LineItem};
pub use snapshot::BackupSnapshot;
