//! Expense CLI commands
//!
//! Implements CLI commands for recording categorized expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::{PocketbookError, PocketbookResult};
use crate::services::{CategoryService, ExpenseService, PersonService};
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense for a month
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "45" or "45.90")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List a month's expenses
    List {
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (short or full form)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PocketbookResult<()> {
    let person = PersonService::new(storage).require()?;
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            month,
            note,
        } => {
            let month = parse_month(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let category = CategoryService::new(storage)
                .find(&category)?
                .ok_or_else(|| {
                    PocketbookError::Validation(format!("Unknown category: {}", category))
                })?;

            let expense = service.add(person.id, month, category.id, &name, amount, note)?;
            println!(
                "Added expense '{}' of {} to {} for {}",
                expense.name,
                expense.amount.format_with_symbol(symbol),
                category.name,
                month.label()
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            let expenses = service.list_for_month_with_categories(person.id, &month)?;

            println!("Expenses for {}", month.label());
            println!("{}", format_expense_table(&expenses, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| PocketbookError::expense_not_found(&id))?;
            let removed = service.delete(expense.id)?;
            println!(
                "Deleted expense '{}' ({}) from {}",
                removed.name,
                removed.amount.format_with_symbol(symbol),
                removed.month.label()
            );
        }
    }

    Ok(())
}
