//! Invox Engine - Ledger orchestration layer
//!
//! Coordinates the pure policies from `invox-core` with the document store
//! port from `invox-store`:
//! - [`LedgerService`]: the public operation surface (record, replace-all,
//!   numbering, export, backup listing and restore)
//! - [`backup`]: the write-gate → capture → admission pipeline
//! - [`clock`]: the time seam used to stamp snapshots

pub mod backup;
pub mod clock;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use service::LedgerService;
