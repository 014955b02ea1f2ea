//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod history;
pub mod income;
pub mod person;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::{handle_history_command, HistoryCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use person::{handle_person_command, PersonCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, YearMonth};

/// Parse a user-entered amount within `0..=Money::MAX`
pub(crate) fn parse_amount(input: &str) -> PocketbookResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| PocketbookError::Validation(format!("Invalid amount: {}", e)))?;
    if amount.is_negative() {
        return Err(PocketbookError::Validation(format!(
            "Amount cannot be negative: {}",
            input.trim()
        )));
    }
    if amount > Money::MAX {
        return Err(PocketbookError::Validation(format!(
            "Amount {} exceeds the maximum of {}",
            input.trim(),
            Money::MAX
        )));
    }
    Ok(amount)
}

/// Parse `--month`, defaulting to the current month
pub(crate) fn parse_month(input: Option<&str>) -> PocketbookResult<YearMonth> {
    YearMonth::parse_or_current(input).map_err(|e| PocketbookError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> PocketbookResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PocketbookError::Validation(format!("Invalid date: {} (expected YYYY-MM-DD)", input))
    })
}
