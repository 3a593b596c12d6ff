//! Invoice number command

use clap::{Args, Subcommand};

use super::DEFAULT_DB;

#[derive(Debug, Args)]
pub struct NumberArgs {
    #[command(subcommand)]
    pub command: NumberCommand,

    #[arg(long, global = true, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Debug, Subcommand)]
pub enum NumberCommand {
    /// Show the next invoice number without consuming it
    Show,
    /// Consume the current number and print the new one
    Issue,
}

pub async fn execute(args: NumberArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service(&args.db)?;

    match args.command {
        NumberCommand::Show => {
            println!("{}", service.next_invoice_number().await?);
        }
        NumberCommand::Issue => {
            println!("{}", service.issue_invoice_number().await?);
        }
    }
    Ok(())
}
