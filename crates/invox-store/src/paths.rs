//! Logical path layout of the persisted ledger
//!
//! Path spellings are wire-compatible with the existing database layout
//! (including the lone camelCase `invoiceNumber` node); do not rename them.

/// Update counter driving the write gate, range [0,5)
pub const UPDATE_COUNT: &str = "update-count";

/// The invoice collection, keyed by store-assigned id
pub const INVOICES: &str = "invoices";

/// Retained backup snapshots, keyed by store-assigned id
pub const INVOICE_BACKUPS: &str = "invoice-backups";

/// Authoritative count of retained snapshots
pub const BACKUP_COUNT: &str = "backup-count";

/// Next-invoice-number counter, default 1001
pub const INVOICE_NUMBER: &str = "invoiceNumber";

/// Path of a single backup snapshot
pub fn backup_snapshot(key: &str) -> String {
    format!("{}/{}", INVOICE_BACKUPS, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_snapshot_path() {
        assert_eq!(backup_snapshot("abc"), "invoice-backups/abc");
    }
}
