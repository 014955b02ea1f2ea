//! History CLI commands
//!
//! Shows the stored month snapshots and the audit log.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::PocketbookResult;
use crate::services::PersonService;
use crate::storage::Storage;

use super::parse_month;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show the stored snapshot of a month
    Show {
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the most recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a history command
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    cmd: HistoryCommands,
) -> PocketbookResult<()> {
    match cmd {
        HistoryCommands::Show { month } => {
            let person = PersonService::new(storage).require()?;
            let month = parse_month(month.as_deref())?;
            let symbol = settings.currency_symbol.as_str();

            let Some(snapshot) = storage.history().read(person.id, &month)? else {
                println!("No snapshot stored for {}.", month.label());
                return Ok(());
            };

            println!(
                "Snapshot for {} (written {})",
                month.label(),
                snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!(
                "  {}",
                storage.history().snapshot_path(person.id, &month).display()
            );
            println!();
            println!("Income:");
            if snapshot.income.is_empty() {
                println!("  (none)");
            }
            for line in &snapshot.income {
                println!("  {:<32} {:>14}", line.name, line.amount.format_with_symbol(symbol));
            }
            println!();
            println!("Expenses:");
            if snapshot.expenses.is_empty() {
                println!("  (none)");
            }
            for line in &snapshot.expenses {
                println!(
                    "  {:<18} {:<24} {:>14}",
                    line.category,
                    line.name,
                    line.amount.format_with_symbol(symbol)
                );
            }
        }

        HistoryCommands::Log { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
