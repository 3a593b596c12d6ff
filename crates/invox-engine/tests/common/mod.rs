#![allow(dead_code)]
//! Shared fixtures for the engine integration tests

use async_trait::async_trait;
use invox_core::errors::{ErrorKind, LedgerError, Result};
use invox_core::model::{BillInfo, DraftLineItem, InvoiceDraft};
use invox_store::{DocumentStore, MemoryStore, OrderDirection};
use serde_json::Value;

/// A draft with one line item and all transient editor flags set
pub fn draft(invoice_number: u32) -> InvoiceDraft {
    InvoiceDraft {
        invoice_number,
        invoice_date: "2025-06-01".to_string(),
        bill_info: BillInfo {
            company_name: "Acme GmbH".to_string(),
            vat_no: "DE123456789".to_string(),
            street: "Hauptstr. 1".to_string(),
            city: "Berlin".to_string(),
            postal_code: "10115".to_string(),
            country: "Germany".to_string(),
            email: "billing@acme.example".to_string(),
        },
        items: vec![DraftLineItem {
            description: "Consulting".to_string(),
            price: 100.0,
            tax: 19.0,
            amount: 119.0,
            expanded: true,
        }],
        invoice_modified: true,
        show_bill_section: true,
    }
}

/// Delegates to an inner [`MemoryStore`] but fails every `push` into one
/// configured collection, simulating a store outage during backup admission
/// while the primary write path keeps working.
pub struct FailingPushStore {
    inner: MemoryStore,
    failing_collection: String,
}

impl FailingPushStore {
    pub fn new(failing_collection: &str) -> Self {
        Self {
            inner: MemoryStore::new(),
            failing_collection: failing_collection.to_string(),
        }
    }

    pub async fn dump(&self) -> Value {
        self.inner.dump().await
    }
}

#[async_trait]
impl DocumentStore for FailingPushStore {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        self.inner.get(path).await
    }

    async fn set(&self, path: &str, value: Value) -> Result<()> {
        self.inner.set(path, value).await
    }

    async fn push(&self, collection: &str, value: Value) -> Result<String> {
        if collection == self.failing_collection {
            return Err(LedgerError::new(ErrorKind::StoreUnavailable)
                .with_op("push")
                .with_path(collection)
                .with_message("simulated store outage"));
        }
        self.inner.push(collection, value).await
    }

    async fn remove(&self, path: &str) -> Result<()> {
        self.inner.remove(path).await
    }

    async fn query_ordered(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
        direction: OrderDirection,
    ) -> Result<Vec<(String, Value)>> {
        self.inner
            .query_ordered(collection, order_field, limit, direction)
            .await
    }
}
