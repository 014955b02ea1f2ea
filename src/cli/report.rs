//! CLI commands for reports
//!
//! Shows the monthly report in the terminal and exports it as a document.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::PocketbookResult;
use crate::export::{export_to_file, ExportFormat};
use crate::services::{PersonService, ReportService};
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the monthly report: totals, category breakdown and chart
    Show {
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export the monthly report as a document
    Export {
        /// Month (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Output file; defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PocketbookResult<()> {
    let person = PersonService::new(storage).require()?;
    let service = ReportService::new(storage);

    match cmd {
        ReportCommands::Show { month } => {
            let month = parse_month(month.as_deref())?;
            let report = service.monthly_report(person.id, month)?;
            println!("{}", person.full_name());
            print!("{}", report.format_terminal(settings));
        }

        ReportCommands::Export {
            month,
            format,
            output,
        } => {
            let month = parse_month(month.as_deref())?;
            let document = service.document(person.id, month)?;
            let path = export_to_file(
                &document,
                format,
                output.as_deref(),
                &storage.paths().exports_dir(),
                &settings.currency_symbol,
            )?;
            println!("Report for {} exported to {}", month.label(), path.display());
        }
    }

    Ok(())
}
