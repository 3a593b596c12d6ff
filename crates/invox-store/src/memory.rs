//! In-memory document store backend
//!
//! The in-process fake used by unit and integration tests. Holds the whole
//! document tree under one `RwLock`, which makes every port operation
//! individually atomic, exactly matching the atomicity granularity the
//! rotation scheme assumes of the remote store.

use async_trait::async_trait;
use invox_core::errors::Result;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::port::{DocumentStore, OrderDirection};
use crate::tree;

/// HashMap-free, tree-shaped in-memory store
///
/// Push keys are UUIDv7 so they sort in creation order, giving the
/// deterministic tie-break on equal timestamps that eviction relies on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: RwLock<Value>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Value::Object(Map::new())),
        }
    }

    /// Create a store pre-seeded with a document tree (test setup helper)
    pub fn with_root(root: Value) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    /// Clone the entire document tree (test assertion helper)
    pub async fn dump(&self) -> Value {
        self.root.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let root = self.root.read().await;
        Ok(tree::get_at(&root, path).cloned())
    }

    async fn set(&self, path: &str, value: Value) -> Result<()> {
        let mut root = self.root.write().await;
        tree::set_at(&mut root, path, value);
        Ok(())
    }

    async fn push(&self, collection: &str, value: Value) -> Result<String> {
        let key = Uuid::now_v7().to_string();
        let mut root = self.root.write().await;
        tree::set_at(&mut root, &format!("{}/{}", collection, key), value);
        Ok(key)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let mut root = self.root.write().await;
        tree::remove_at(&mut root, path);
        Ok(())
    }

    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
        direction: OrderDirection,
    ) -> Result<Vec<(String, Value)>> {
        let root = self.root.read().await;
        let Some(node) = tree::get_at(&root, collection) else {
            return Ok(Vec::new());
        };
        Ok(tree::ordered_children(
            node,
            order_field,
            limit,
            direction == OrderDirection::Descending,
        ))
    }
}
