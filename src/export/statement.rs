//! Printable text statement
//!
//! Lays the report out the way it would appear on paper: title block,
//! summary table, income table and expense table, each with a total row.

use std::io::Write;

use crate::display::report::{format_percentage, truncate};
use crate::error::{PocketbookError, PocketbookResult};

use super::ReportDocument;

const WIDTH: usize = 72;

/// Render the statement as a string
pub fn format_statement(document: &ReportDocument, symbol: &str) -> String {
    let report = &document.report;
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let mut out = String::new();

    out.push_str(&format!("{:^width$}\n", document.title.to_uppercase(), width = WIDTH));
    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!("Person:    {}\n", document.person.full_name()));
    out.push_str(&format!(
        "Month:     {} ({})\n",
        document.month.label(),
        document.month
    ));
    out.push_str(&format!("Generated: {}\n\n", document.generated_on));

    out.push_str("SUMMARY\n");
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!("{:<40} {:>16}\n", "Total income", money(report.total_income)));
    out.push_str(&format!("{:<40} {:>16}\n", "Total expenses", money(report.total_expenses)));
    out.push_str(&format!("{:<40} {:>16}\n\n", "Balance", money(report.balance)));

    out.push_str("INCOME\n");
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
    if document.income.is_empty() {
        out.push_str("(none)\n");
    }
    for line in &document.income {
        out.push_str(&format!(
            "{:<40} {:>16}\n",
            truncate(&line.name, 40),
            money(line.amount)
        ));
    }
    out.push_str(&format!("{:<40} {:>16}\n\n", "TOTAL", money(report.total_income)));

    out.push_str("EXPENSES\n");
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<20} {:<26} {:>14} {:>8}\n",
        "Category", "Name", "Amount", "%"
    ));
    if document.expenses.is_empty() {
        out.push_str("(none)\n");
    }
    for line in &document.expenses {
        out.push_str(&format!(
            "{:<20} {:<26} {:>14} {:>8}\n",
            truncate(&line.category, 20),
            truncate(&line.name, 26),
            money(line.amount),
            line.percentage
                .map(format_percentage)
                .unwrap_or_else(|| "-".to_string())
        ));
    }
    let total_pct = if report.total_expenses.is_zero() {
        "-".to_string()
    } else {
        format_percentage(100.0)
    };
    out.push_str(&format!(
        "{:<20} {:<26} {:>14} {:>8}\n",
        "TOTAL",
        "",
        money(report.total_expenses),
        total_pct
    ));

    if !report.breakdown.is_empty() {
        out.push_str("\nBY CATEGORY\n");
        out.push_str(&"-".repeat(WIDTH));
        out.push('\n');
        for (name, entry) in report.categories_by_amount() {
            out.push_str(&format!(
                "{:<40} {:>16} {:>8}\n",
                truncate(name, 40),
                money(entry.amount),
                format_percentage(entry.percentage)
            ));
        }
    }

    out
}

/// Write the statement to a writer
pub fn export_report_text<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
    symbol: &str,
) -> PocketbookResult<()> {
    writer
        .write_all(format_statement(document, symbol).as_bytes())
        .map_err(|e| PocketbookError::Export(e.to_string()))
}
