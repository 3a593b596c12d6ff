use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full invoice collection as stored under the `invoices` path,
/// keyed by store-assigned id.
///
/// BTreeMap keeps key iteration deterministic, which matters for CSV
/// rendering and for snapshot equality assertions in tests.
pub type InvoiceSet = BTreeMap<String, Invoice>;

/// Billing details for the invoiced party
///
/// Field names serialize in camelCase for wire compatibility with the
/// existing database layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInfo {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub vat_no: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub email: String,
}

/// A single invoice line item as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub price: f64,
    pub tax: f64,
    pub amount: f64,
}

/// Persisted invoice record
///
/// This is the shape written to the `invoices` collection and captured into
/// backup snapshots. It carries no UI state; see [`InvoiceDraft`] for the
/// editor-side shape that transient flags are stripped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: u32,
    pub invoice_date: String,
    #[serde(default)]
    pub bill_info: BillInfo,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// A line item as edited in the caller's UI, including the transient
/// `expanded` flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLineItem {
    pub description: String,
    pub price: f64,
    pub tax: f64,
    pub amount: f64,
    /// UI expansion state; never persisted
    #[serde(default)]
    pub expanded: bool,
}

/// An invoice as held by the caller before recording
///
/// Transient UI fields (`invoice_modified`, `show_bill_section`, per-item
/// `expanded`) exist only on this type. [`InvoiceDraft::into_record`] is the
/// single place they are stripped; they never re-enter persisted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: u32,
    pub invoice_date: String,
    #[serde(default)]
    pub bill_info: BillInfo,
    #[serde(default)]
    pub items: Vec<DraftLineItem>,
    /// Dirty flag maintained by the editor; never persisted
    #[serde(default)]
    pub invoice_modified: bool,
    /// Section visibility flag maintained by the editor; never persisted
    #[serde(default)]
    pub show_bill_section: bool,
}

impl InvoiceDraft {
    /// Strip transient UI fields and produce the persistable record
    pub fn into_record(self) -> Invoice {
        Invoice {
            invoice_number: self.invoice_number,
            invoice_date: self.invoice_date,
            bill_info: self.bill_info,
            items: self
                .items
                .into_iter()
                .map(|item| LineItem {
                    description: item.description,
                    price: item.price,
                    tax: item.tax,
                    amount: item.amount,
                })
                .collect(),
        }
    }
}
