//! File-backed document store backend
//!
//! Persists the whole document tree as one JSON file, flushed after every
//! mutation with a temp-then-rename write so a crash never leaves a partial
//! file behind. Used by the CLI; not intended for concurrent processes.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use invox_core::errors::Result;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::BackendError;
use crate::port::{DocumentStore, OrderDirection};
use crate::tree;

/// Single-file JSON tree store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    root: RwLock<Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the existing tree if the file
    /// exists and starting empty otherwise.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let root = if path.exists() {
            let bytes =
                fs::read(&path).map_err(|e| BackendError::from(e).into_ledger("open_store"))?;
            serde_json::from_slice(&bytes)
                .map_err(|e| BackendError::from(e).into_ledger("open_store"))?
        } else {
            Value::Object(Map::new())
        };

        Ok(Self {
            path,
            root: RwLock::new(root),
        })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically write the tree to disk (temp file + rename)
    fn flush(&self, root: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| BackendError::from(e).into_ledger("create_store_dir"))?;
            }
        }

        let bytes = serde_json::to_vec_pretty(root)
            .map_err(|e| BackendError::from(e).into_ledger("flush_store"))?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, bytes)
            .map_err(|e| BackendError::from(e).into_ledger("write_store_temp"))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| BackendError::from(e).into_ledger("rename_store_temp"))?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let root = self.root.read().await;
        Ok(tree::get_at(&root, path).cloned())
    }

    async fn set(&self, path: &str, value: Value) -> Result<()> {
        let mut root = self.root.write().await;
        tree::set_at(&mut root, path, value);
        self.flush(&root)
    }

    async fn push(&self, collection: &str, value: Value) -> Result<String> {
        let key = Uuid::now_v7().to_string();
        let mut root = self.root.write().await;
        tree::set_at(&mut root, &format!("{}/{}", collection, key), value);
        self.flush(&root)?;
        Ok(key)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let mut root = self.root.write().await;
        tree::remove_at(&mut root, path);
        self.flush(&root)
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
