//! Monthly Report
//!
//! Totals a person's income and expenses for one month and breaks the
//! expenses down by category with their share of total spending.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::settings::Settings;
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, CategoryId, Expense, Income, Money, PersonId, YearMonth};
use crate::storage::Storage;

/// One category's slice of a month's expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sum of the category's expenses
    pub amount: Money,
    /// Display color of the category
    pub color: String,
    /// Share of total expenses, in percent with one decimal
    pub percentage: f64,
}

/// Aggregated view of one person's month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub person_id: PersonId,
    pub month: YearMonth,
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`, negative when overspent
    pub balance: Money,
    pub income_count: usize,
    pub expense_count: usize,
    /// Category name to its breakdown; categories without spending are absent
    pub breakdown: BTreeMap<String, CategoryBreakdown>,
}

/// Aggregate a month's records into a report
///
/// `income` and `expenses` are the records of `person_id` for `month`;
/// `categories` resolves each expense's category name and color. An expense
/// whose category is not in `categories` is an integrity error.
pub fn aggregate(
    person_id: PersonId,
    month: YearMonth,
    income: &[Income],
    expenses: &[Expense],
    categories: &[Category],
) -> PocketbookResult<MonthlyReport> {
    let total_income = checked_total(income.iter().map(|i| i.amount), "income")?;

    let lookup: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    let mut per_category: HashMap<CategoryId, Money> = HashMap::new();
    for expense in expenses {
        if !lookup.contains_key(&expense.category_id) {
            return Err(PocketbookError::Integrity(format!(
                "Expense {} ('{}') references missing category {}",
                expense.id, expense.name, expense.category_id
            )));
        }
        let slot = per_category.entry(expense.category_id).or_insert_with(Money::zero);
        *slot = slot
            .checked_add(expense.amount)
            .ok_or_else(|| overflow("category expenses"))?;
    }

    let total_expenses = checked_total(per_category.values().copied(), "expenses")?;
    let balance = total_income
        .checked_sub(total_expenses)
        .ok_or_else(|| overflow("balance"))?;

    let mut breakdown = BTreeMap::new();
    for (category_id, amount) in per_category {
        if amount.is_zero() {
            continue;
        }
        // Non-zero category total implies non-zero overall total
        let Some(percentage) = amount.percentage_of(total_expenses) else {
            continue;
        };
        let category = lookup[&category_id];
        breakdown.insert(
            category.name.clone(),
            CategoryBreakdown {
                amount,
                color: category.color.clone(),
                percentage,
            },
        );
    }

    Ok(MonthlyReport {
        person_id,
        month,
        total_income,
        total_expenses,
        balance,
        income_count: income.len(),
        expense_count: expenses.len(),
        breakdown,
    })
}

/// Sum amounts, failing instead of wrapping past the range of `Money`
fn checked_total(mut amounts: impl Iterator<Item = Money>, what: &str) -> PocketbookResult<Money> {
    amounts.try_fold(Money::zero(), |acc, amount| {
        acc.checked_add(amount).ok_or_else(|| overflow(what))
    })
}

fn overflow(what: &str) -> PocketbookError {
    PocketbookError::Integrity(format!("Total of {} is out of range", what))
}

impl MonthlyReport {
    /// Generate the report for a stored person and month
    pub fn generate(
        storage: &Storage,
        person_id: PersonId,
        month: YearMonth,
    ) -> PocketbookResult<Self> {
        if storage.people.get(person_id)?.is_none() {
            return Err(PocketbookError::person_not_found(person_id.to_string()));
        }

        let income = storage.income.get_for_month(person_id, &month)?;
        let expenses = storage.expenses.get_for_month(person_id, &month)?;
        let categories = storage.categories.get_all()?;

        aggregate(person_id, month, &income, &expenses, &categories)
    }

    /// No income and no expense records at all
    ///
    /// A month whose records sum to zero is not empty.
    pub fn is_empty(&self) -> bool {
        self.income_count == 0 && self.expense_count == 0
    }

    /// Breakdown entries, largest amount first, ties by name
    pub fn categories_by_amount(&self) -> Vec<(&str, &CategoryBreakdown)> {
        let mut entries: Vec<_> = self
            .breakdown
            .iter()
            .map(|(name, b)| (name.as_str(), b))
            .collect();
        entries.sort_by(|a, b| b.1.amount.cmp(&a.1.amount).then(a.0.cmp(b.0)));
        entries
    }

    /// Share of total expenses an individual amount represents
    pub fn share_of_expenses(&self, amount: Money) -> Option<f64> {
        amount.percentage_of(self.total_expenses)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!("Monthly Report: {}\n", self.month.label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Total Income:",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Total Expenses:",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Balance:",
            self.balance.format_with_symbol(symbol)
        ));

        if self.is_empty() {
            output.push_str("\nNo income or expenses recorded for this month.\n");
            return output;
        }

        if self.breakdown.is_empty() {
            output.push_str("\nNo spending to break down.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>8}  {}\n",
            "Category", "Amount", "%", "Color"
        ));
        output.push_str(&separator(60));
        output.push('\n');

        let entries = self.categories_by_amount();
        for (name, entry) in &entries {
            output.push_str(&format!(
                "{:<24} {:>14} {:>8}  {}\n",
                truncate(name, 24),
                entry.amount.format_with_symbol(symbol),
                format_percentage(entry.percentage),
                entry.color
            ));
        }
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>8}\n",
            "TOTAL",
            self.total_expenses.format_with_symbol(symbol),
            format_percentage(100.0)
        ));

        output.push('\n');
        let max = entries
            .first()
            .map(|(_, e)| e.amount.as_f64())
            .unwrap_or(0.0);
        for (name, entry) in &entries {
            output.push_str(&format!(
                "{:<16} {} {}\n",
                truncate(name, 16),
                format_bar(entry.amount.as_f64(), max, settings.chart_width),
                format_percentage(entry.percentage)
            ));
        }

        output
    }
}
