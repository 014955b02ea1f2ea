//! CSV export of a monthly report
//!
//! One table with a `Section` column: report details, summary, income and
//! expense rows, each list closed by a TOTAL row.

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};

use super::ReportDocument;

const HEADER: [&str; 5] = ["Section", "Category", "Name", "Amount", "Percentage"];

/// Export a report document to CSV
pub fn export_report_csv<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
) -> PocketbookResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    let report = &document.report;

    let mut write = |row: [String; 5]| {
        csv.write_record(&row)
            .map_err(|e| PocketbookError::Export(e.to_string()))
    };

    write(HEADER.map(String::from))?;

    write(row("Report", "", "Person", &document.person.full_name(), ""))?;
    write(row("Report", "", "Month", &document.month.to_string(), ""))?;
    write(row("Report", "", "Generated", &document.generated_on.to_string(), ""))?;

    write(row("Summary", "", "Total Income", &report.total_income.to_string(), ""))?;
    write(row("Summary", "", "Total Expenses", &report.total_expenses.to_string(), ""))?;
    write(row("Summary", "", "Balance", &report.balance.to_string(), ""))?;

    for line in &document.income {
        write(row("Income", "", &line.name, &line.amount.to_string(), ""))?;
    }
    write(row("Income", "", "TOTAL", &report.total_income.to_string(), ""))?;

    for line in &document.expenses {
        let pct = line
            .percentage
            .map(|p| format!("{:.1}", p))
            .unwrap_or_default();
        write(row(
            "Expense",
            &line.category,
            &line.name,
            &line.amount.to_string(),
            &pct,
        ))?;
    }
    let total_pct = if report.total_expenses.is_zero() {
        ""
    } else {
        "100.0"
    };
    write(row(
        "Expense",
        "",
        "TOTAL",
        &report.total_expenses.to_string(),
        total_pct,
    ))?;

    csv.flush().map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

fn row(section: &str, category: &str, name: &str, amount: &str, pct: &str) -> [String; 5] {
    [section, category, name, amount, pct].map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_document;

    fn export() -> String {
        let mut buffer = Vec::new();
        export_report_csv(&sample_document(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let csv = export();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "Section,Category,Name,Amount,Percentage");
        assert!(lines.contains(&"Report,,Person,Ana Petrovic,"));
        assert!(lines.contains(&"Summary,,Balance,500.00,"));
        assert!(lines.contains(&"Income,,Salary,1000.00,"));
        assert!(lines.contains(&"Expense,Groceries,Market,200.00,40.0"));
        assert!(lines.contains(&"Expense,Housing,Rent,300.00,60.0"));
        assert_eq!(*lines.last().unwrap(), "Expense,,TOTAL,500.00,100.0");
    }

    #[test]
    fn test_csv_parses_back() {
        let csv = export();
        let mut reader = ::csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();

        assert!(records.iter().all(|r| r.len() == 5));
        let expenses = records.iter().filter(|r| &r[0] == "Expense").count();
        assert_eq!(expenses, 3);
    }
}
