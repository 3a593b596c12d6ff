//! CSV rendering of invoices
//!
//! Flattens the nested invoice collection into one row per line item, in the
//! fixed column layout consumed by downstream spreadsheets. The layout is
//! wire-compatible with the existing export: UTF-8 BOM prefix, fixed header,
//! monetary fields rendered with two decimals, missing bill fields rendered
//! empty. Fields are not quoted or escaped; the schema is fixed and this
//! renderer does not redesign it.

use crate::errors::{ErrorKind, LedgerError, Result};
use crate::model::InvoiceSet;

/// Byte-order mark so spreadsheet tools detect UTF-8
const UTF8_BOM: &str = "\u{FEFF}";

const HEADER: [&str; 13] = [
    "Invoice Number",
    "Invoice Date",
    "Company",
    "VAT No.",
    "Address",
    "City",
    "Postal Code",
    "Country",
    "Email",
    "Description",
    "Price",
    "Tax",
    "Amount",
];

/// Render the invoice collection as delimited text
///
/// Pure function: no store access. Invoices without line items contribute no
/// rows (header only, matching the existing export).
///
/// # Errors
///
/// Returns `ErrorKind::MissingInvoiceData` when the collection is empty, so
/// callers never produce an empty file.
pub fn render_csv(invoices: &InvoiceSet) -> Result<String> {
    if invoices.is_empty() {
        return Err(LedgerError::new(ErrorKind::MissingInvoiceData)
            .with_op("render_csv")
            .with_message("no invoice data to export"));
    }

    let mut out = String::new();
    out.push_str(UTF8_BOM);
    out.push_str(&HEADER.join(","));
    out.push('\n');

    for invoice in invoices.values() {
        for item in &invoice.items {
            let row = [
                invoice.invoice_number.to_string(),
                invoice.invoice_date.clone(),
                invoice.bill_info.company_name.clone(),
                invoice.bill_info.vat_no.clone(),
                invoice.bill_info.street.clone(),
                invoice.bill_info.city.clone(),
                invoice.bill_info.postal_code.clone(),
                invoice.bill_info.country.clone(),
                invoice.bill_info.email.clone(),
                item.description.clone(),
                format!("{:.2}", item.price),
                format!("{:.2}", item.tax),
                format!("{:.2}", item.amount),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    Ok(out)
}
