//! CLI command implementations

use std::sync::Arc;

use invox_engine::LedgerService;
use invox_store::JsonFileStore;

pub mod backups;
pub mod export;
pub mod list;
pub mod number;
pub mod record;

/// Default location of the ledger file
pub const DEFAULT_DB: &str = ".invox/ledger.json";

/// Open the file-backed ledger with production policies
pub fn open_service(db: &str) -> Result<LedgerService, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(db)?;
    Ok(LedgerService::new(Arc::new(store)))
}
