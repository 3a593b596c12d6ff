//! List command

use clap::Args;

use super::DEFAULT_DB;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

pub async fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service(&args.db)?;
    let invoices = service.invoices().await?;

    println!("{}", serde_json::to_string_pretty(&invoices)?);
    Ok(())
}
