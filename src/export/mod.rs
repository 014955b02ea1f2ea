//! Export module for Pocketbook
//!
//! Renders a person's monthly report, together with the month's income and
//! expense lists, as a document:
//! - Text: a printable statement with summary, income and expense tables
//! - CSV: the same sections as spreadsheet rows
//! - JSON / YAML: the whole document, machine-readable

pub mod csv;
pub mod json;
pub mod statement;
pub mod yaml;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Expense, Income, Money, Person, PersonId, YearMonth};
use crate::reports::MonthlyReport;

pub use self::csv::export_report_csv;
pub use json::export_report_json;
pub use statement::{export_report_text, format_statement};
pub use yaml::export_report_yaml;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output formats for an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Who the report is for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPerson {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl ReportPerson {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Income line of an exported report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeLine {
    pub name: String,
    pub amount: Money,
}

/// Expense line of an exported report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub category: String,
    pub name: String,
    pub amount: Money,
    /// Share of the month's total expenses; absent when that total is zero
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A monthly report with everything needed to print it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: String,
    pub app_version: String,
    pub title: String,
    pub generated_on: NaiveDate,
    pub person: ReportPerson,
    pub month: YearMonth,
    pub report: MonthlyReport,
    pub income: Vec<IncomeLine>,
    pub expenses: Vec<ExpenseLine>,
}

impl ReportDocument {
    /// Assemble a document; each expense comes paired with its category name
    pub fn new(
        person: &Person,
        report: MonthlyReport,
        income: &[Income],
        expenses: &[(Expense, String)],
        generated_on: NaiveDate,
    ) -> Self {
        let expenses = expenses
            .iter()
            .map(|(expense, category)| ExpenseLine {
                category: category.clone(),
                name: expense.name.clone(),
                amount: expense.amount,
                percentage: report.share_of_expenses(expense.amount),
                note: expense.note.clone(),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            title: "Monthly Financial Report".to_string(),
            generated_on,
            person: ReportPerson {
                id: person.id,
                first_name: person.first_name.clone(),
                last_name: person.last_name.clone(),
                birth_date: person.birth_date,
            },
            month: report.month,
            income: income
                .iter()
                .map(|i| IncomeLine {
                    name: i.name.clone(),
                    amount: i.amount,
                })
                .collect(),
            expenses,
            report,
        }
    }

    /// `Report_<First>_<Last>_<YYYY-MM>.<ext>`
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        format!(
            "Report_{}_{}_{}.{}",
            file_component(&self.person.first_name),
            file_component(&self.person.last_name),
            self.month,
            format.extension()
        )
    }
}

/// Replace characters that are awkward in file names
fn file_component(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

/// Render a document in the given format
pub fn write_document<W: Write>(
    document: &ReportDocument,
    format: ExportFormat,
    writer: &mut W,
    currency_symbol: &str,
) -> PocketbookResult<()> {
    match format {
        ExportFormat::Text => export_report_text(document, writer, currency_symbol),
        ExportFormat::Csv => export_report_csv(document, writer),
        ExportFormat::Json => export_report_json(document, writer),
        ExportFormat::Yaml => export_report_yaml(document, writer),
    }
}

/// Write a document to `output`, or to its default file name inside `exports_dir`
pub fn export_to_file(
    document: &ReportDocument,
    format: ExportFormat,
    output: Option<&Path>,
    exports_dir: &Path,
    currency_symbol: &str,
) -> PocketbookResult<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => exports_dir.join(document.default_file_name(format)),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PocketbookError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&path).map_err(|e| {
        PocketbookError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_document(document, format, &mut writer, currency_symbol)?;
    writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    info!(path = %path.display(), ?format, "report exported");
    Ok(path)
}
