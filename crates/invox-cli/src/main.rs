//! Invox CLI
//!
//! Command-line interface for the invoice ledger

use clap::{Parser, Subcommand};
use invox_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "invox")]
#[command(about = "Invox - Invoice ledger with rotating backups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record an invoice from a JSON draft
    Record(commands::record::RecordArgs),
    /// Print the invoice collection as JSON
    List(commands::list::ListArgs),
    /// Export the invoice collection as CSV
    Export(commands::export::ExportArgs),
    /// Invoice number operations
    Number(commands::number::NumberArgs),
    /// Backup snapshot operations
    Backups(commands::backups::BackupsArgs),
}

#[tokio::main]
async fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Record(args) => commands::record::execute(args).await,
        Commands::List(args) => commands::list::execute(args).await,
        Commands::Export(args) => commands::export::execute(args).await,
        Commands::Number(args) => commands::number::execute(args).await,
        Commands::Backups(args) => commands::backups::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
