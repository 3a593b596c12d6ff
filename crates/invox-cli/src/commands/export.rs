//! Export command

use std::path::PathBuf;

use clap::Args;

use super::DEFAULT_DB;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

pub async fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service(&args.db)?;
    let csv = service.export_csv().await?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("Exported to {}", path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
