//! Typed counter access over the document store
//!
//! The ledger keeps three integer counters (`update-count`, `backup-count`,
//! `invoiceNumber`). Decoding is fail-open: an absent, corrupt, or negative
//! value decodes to the supplied default rather than producing an error, so a
//! damaged counter can never block the primary write path.

use invox_core::errors::Result;
use serde_json::Value;

use crate::port::DocumentStore;

/// Decode a counter value, falling back to `default` on anything that is not
/// a non-negative integer (numeric strings are accepted, matching data
/// written by older clients).
fn decode(value: Option<&Value>, default: u64) -> u64 {
    match value {
        None => default,
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(default),
        Some(_) => default,
    }
}

/// Read the counter at `path`, defaulting on absence or corruption
pub async fn read_counter(store: &dyn DocumentStore, path: &str, default: u64) -> Result<u64> {
    let raw = store.get(path).await?;
    let value = decode(raw.as_ref(), default);
    if raw.is_some() && raw.as_ref().and_then(Value::as_u64) != Some(value) {
        // Either a numeric string or a corrupt value; both are tolerated
        tracing::debug!(path = %path, value = value, "counter decoded leniently");
    }
    Ok(value)
}

/// Persist the counter at `path`
pub async fn write_counter(store: &dyn DocumentStore, path: &str, value: u64) -> Result<()> {
    store.set(path, Value::from(value)).await
}
