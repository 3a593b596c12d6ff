//! Backup snapshot command

use clap::{Args, Subcommand};

use super::DEFAULT_DB;

#[derive(Debug, Args)]
pub struct BackupsArgs {
    #[command(subcommand)]
    pub command: BackupsCommand,

    #[arg(long, global = true, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Debug, Subcommand)]
pub enum BackupsCommand {
    /// List retained snapshots, oldest first
    List,
    /// Replace the invoice collection with a snapshot's contents
    Restore(RestoreArgs),
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Snapshot key as printed by `backups list`
    #[arg(long)]
    pub key: String,
}

pub async fn execute(args: BackupsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service(&args.db)?;

    match args.command {
        BackupsCommand::List => {
            let backups = service.list_backups().await?;
            if backups.is_empty() {
                println!("No backup snapshots.");
                return Ok(());
            }
            for (key, snapshot) in backups {
                println!(
                    "{}  timestamp={}  invoices={}",
                    key,
                    snapshot.timestamp.as_millis(),
                    snapshot.invoices.len()
                );
            }
        }
        BackupsCommand::Restore(restore) => {
            service.restore_snapshot(&restore.key).await?;
            println!("Restored snapshot {}", restore.key);
        }
    }
    Ok(())
}
