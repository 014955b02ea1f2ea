//! Income CLI commands
//!
//! Implements CLI commands for recording a month's income.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income_table;
use crate::error::{PocketbookError, PocketbookResult};
use crate::services::{IncomeService, PersonService};
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income for a month
    Add {
        /// Source of the income (e.g., "Salary")
        name: String,
        /// Amount (e.g., "2500" or "2500.00")
        amount: String,
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List a month's income
    List {
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete an income entry
    Delete {
        /// Income ID (short or full form)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> PocketbookResult<()> {
    let person = PersonService::new(storage).require()?;
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            month,
        } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;

            let income = service.add(person.id, month, &name, amount)?;
            println!(
                "Added income '{}' of {} for {}",
                income.name,
                income.amount.format_with_symbol(symbol),
                month.label()
            );
            println!("  ID: {}", income.id);
        }

        IncomeCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            let income = service.list_for_month(person.id, &month)?;

            println!("Income for {}", month.label());
            println!("{}", format_income_table(&income, symbol));
        }

        IncomeCommands::Delete { id } => {
            let income = service
                .find(&id)?
                .ok_or_else(|| PocketbookError::income_not_found(&id))?;
            let removed = service.delete(income.id)?;
            println!(
                "Deleted income '{}' ({}) from {}",
                removed.name,
                removed.amount.format_with_symbol(symbol),
                removed.month.label()
            );
        }
    }

    Ok(())
}
