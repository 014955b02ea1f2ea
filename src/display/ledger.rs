//! Income and expense list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Income, Money};

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a month's income entries with a total row
pub fn format_income_table(income: &[Income], symbol: &str) -> String {
    if income.is_empty() {
        return "No income recorded for this month.".to_string();
    }

    let total = format_total(income.iter().map(|i| i.amount), symbol);
    let rows = income
        .iter()
        .map(|i| IncomeRow {
            id: i.id.to_string(),
            name: i.name.clone(),
            amount: i.amount.format_with_symbol(symbol),
        })
        .chain(std::iter::once(IncomeRow {
            id: String::new(),
            name: "TOTAL".to_string(),
            amount: total,
        }));

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a month's expenses with a total row
///
/// Each expense is paired with the name of its category.
pub fn format_expense_table(expenses: &[(Expense, String)], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded for this month.".to_string();
    }

    let total = format_total(expenses.iter().map(|(e, _)| e.amount), symbol);
    let rows = expenses
        .iter()
        .map(|(e, category)| ExpenseRow {
            id: e.id.to_string(),
            category: category.clone(),
            name: e.name.clone(),
            amount: e.amount.format_with_symbol(symbol),
            note: e.note.clone().unwrap_or_default(),
        })
        .chain(std::iter::once(ExpenseRow {
            id: String::new(),
            category: String::new(),
            name: "TOTAL".to_string(),
            amount: total,
            note: String::new(),
        }));

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Sum for a TOTAL row; stored amounts past the range of `Money` print as such
fn format_total(mut amounts: impl Iterator<Item = Money>, symbol: &str) -> String {
    amounts
        .try_fold(Money::zero(), Money::checked_add)
        .map(|total| total.format_with_symbol(symbol))
        .unwrap_or_else(|| "out of range".to_string())
}
