//! JSON export of a monthly report

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};

use super::ReportDocument;

/// Export a report document as pretty-printed JSON
pub fn export_report_json<W: Write>(
    document: &ReportDocument,
    writer: &mut W,
) -> PocketbookResult<()> {
    serde_json::to_writer_pretty(&mut *writer, document)
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_document;

    #[test]
    fn test_json_export() {
        let mut buffer = Vec::new();
        export_report_json(&sample_document(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["month"], "2025-01");
        assert_eq!(value["report"]["balance"], 50000);
        assert_eq!(value["report"]["breakdown"]["Housing"]["percentage"], 60.0);
        assert_eq!(value["expenses"][1]["note"], "January rent");
        assert!(value["expenses"][0].get("note").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let document = sample_document();
        let mut buffer = Vec::new();
        export_report_json(&document, &mut buffer).unwrap();

        let parsed: ReportDocument = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, document);
    }
}
