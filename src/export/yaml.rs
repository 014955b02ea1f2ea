//! YAML export of a monthly report

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};

use super::ReportDocument;

/// Export a report document as YAML with a short header comment
pub fn export_report_yaml<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
) -> PocketbookResult<()> {
    writeln!(
        writer,
        "# {} for {}, {}",
        document.title,
        document.person.full_name(),
        document.month.label()
    )
    .map_err(|e| PocketbookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", document.generated_on)
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in hundredths of the currency unit")
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, document).map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}
