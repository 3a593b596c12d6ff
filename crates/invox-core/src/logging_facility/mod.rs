//! Logging facility
//!
//! Structured logging built on `tracing`. Provides a single initialization
//! point with environment-specific profiles; all crates emit events through
//! the `tracing` macros and rely on this subscriber setup.

pub mod init;

pub use init::{init, Profile};
