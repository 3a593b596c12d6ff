//! Invox Store - Document store port and backends
//!
//! Provides:
//! - The [`DocumentStore`] port: the async get/set/push/remove/ordered-query
//!   surface the ledger engine is written against
//! - `MemoryStore`: in-process backend used as the test fake
//! - `JsonFileStore`: single-file JSON tree backend used by the CLI
//! - Typed counter helpers with fail-open decoding
//! - The logical path layout of the persisted ledger

pub mod counters;
pub mod errors;
pub mod fs;
pub mod memory;
pub mod paths;
pub mod port;

mod tree;

// Re-export key types
pub use errors::BackendError;
pub use fs::JsonFileStore;
pub use memory::MemoryStore;
pub use port::{DocumentStore, OrderDirection};
