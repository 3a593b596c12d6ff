//! Invox Core - Domain model and policy kernel
//!
//! This crate provides the pure (store-free) parts of the invoice ledger:
//! - Invoice and backup snapshot models, including transient-field stripping
//! - The write-gate and retention policies that govern backup rotation
//! - CSV rendering of the invoice collection
//! - The canonical structured error facility
//! - Logging facility initialization
//!
//! Persistence is a side effect performed elsewhere through an injected store
//! port; everything here is deterministic and unit-testable in isolation.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod policy;
pub mod render;

// Re-export commonly used types
pub use errors::{ErrorKind, LedgerError, Result};
pub use model::{BackupSnapshot, BillInfo, Invoice, InvoiceDraft, InvoiceSet, LineItem};
pub use policy::{
    AlwaysTriggerPolicy, BackupTriggerPolicy, GateOutcome, ModularTriggerPolicy,
    NeverTriggerPolicy, RetentionPolicy,
};
