//! Record command

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use invox_core::model::InvoiceDraft;

use super::DEFAULT_DB;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// JSON draft file; reads stdin when omitted
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

pub async fn execute(args: RecordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let draft: InvoiceDraft = serde_json::from_str(&raw)?;

    let service = super::open_service(&args.db)?;
    let key = service.record_invoice(draft).await?;

    println!("Invoice recorded:");
    println!("  key: {}", key);
    Ok(())
}
