//! The document store port
//!
//! The ledger engine is written against this trait, never against a concrete
//! backend. Paths are slash-separated (`invoice-backups/<key>`); a collection
//! is an object whose children carry store-assigned keys. Each operation is
//! individually atomic; multi-step sequences built on top of them are not,
//! which is an accepted limitation of the rotation scheme.

use async_trait::async_trait;
use invox_core::errors::Result;
use serde_json::Value;

/// Sort direction for ordered collection queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    /// Smallest order-field value first (used to find the oldest snapshot)
    Ascending,
    /// Largest order-field value first
    Descending,
}

/// Async document store abstraction
///
/// Used as `Arc<dyn DocumentStore>`. Implementations must make each call
/// atomic in isolation and must assign `push` keys that sort in creation
/// order, so that key order deterministically breaks timestamp ties.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the value at `path`, or `None` if absent.
    async fn get(&self, path: &str) -> Result<Option<Value>>;

    /// Overwrite the value at `path`, creating intermediate nodes as needed.
    async fn set(&self, path: &str, value: Value) -> Result<()>;

    /// Append `value` to the collection at `collection` under a
    /// store-assigned unique key, and return that key.
    async fn push(&self, collection: &str, value: Value) -> Result<String>;

    /// Remove the value at `path`. Removing an absent path is a no-op.
    async fn remove(&self, path: &str) -> Result<()>;

    /// Return up to `limit` children of `collection` ordered by the numeric
    /// child field `order_field`.
    ///
    /// Children missing the field sort before all children that have it.
    /// Ties are broken by key order, ascending, regardless of direction.
    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
        direction: OrderDirection,
    ) -> Result<Vec<(String, Value)>>;
}
