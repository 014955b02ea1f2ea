//! Per-month history snapshots
//!
//! After every income or expense change the person's whole month is written
//! to `history/person-<id>/<YYYY-MM>.json`. Snapshots are a convenience copy;
//! the ledger files stay authoritative.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PocketbookError;
use crate::models::{ExpenseId, IncomeId, Money, PersonId, YearMonth};

use super::file_io::{read_json_required, write_json_atomic};

/// Income line as recorded in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotIncome {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
}

/// Expense line as recorded in a snapshot, with its category resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotExpense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category: String,
}

/// One person's records for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    pub person_id: PersonId,
    pub month: YearMonth,
    pub income: Vec<SnapshotIncome>,
    pub expenses: Vec<SnapshotExpense>,
    pub generated_at: DateTime<Utc>,
}

/// Writes and reads month snapshots under the history directory
pub struct HistoryWriter {
    dir: PathBuf,
    enabled: bool,
}

impl HistoryWriter {
    pub fn new(dir: PathBuf, enabled: bool) -> Self {
        Self { dir, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Location of a person's snapshot for a month
    pub fn snapshot_path(&self, person_id: PersonId, month: &YearMonth) -> PathBuf {
        self.dir
            .join(format!("person-{}", person_id.as_uuid()))
            .join(format!("{}.json", month))
    }

    /// Write a snapshot, replacing any earlier one for the same month
    ///
    /// Returns `Ok(None)` when history is disabled.
    pub fn write(&self, snapshot: &MonthSnapshot) -> Result<Option<PathBuf>, PocketbookError> {
        if !self.enabled {
            return Ok(None);
        }

        let path = self.snapshot_path(snapshot.person_id, &snapshot.month);
        write_json_atomic(&path, snapshot)?;
        Ok(Some(path))
    }

    /// Read a stored snapshot, if one was ever written
    pub fn read(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> Result<Option<MonthSnapshot>, PocketbookError> {
        let path = self.snapshot_path(person_id, month);
        if !path.exists() {
            return Ok(None);
        }
        read_json_required(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot(person_id: PersonId) -> MonthSnapshot {
        MonthSnapshot {
            person_id,
            month: YearMonth::new(2025, 3).unwrap(),
            income: vec![SnapshotIncome {
                id: IncomeId::new(),
                name: "Salary".into(),
                amount: Money::from_cents(100000),
            }],
            expenses: vec![SnapshotExpense {
                id: ExpenseId::new(),
                name: "Rent".into(),
                amount: Money::from_cents(40000),
                category: "Housing".into(),
            }],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let writer = HistoryWriter::new(temp_dir.path().to_path_buf(), true);
        let person = PersonId::new();
        let snap = snapshot(person);

        let path = writer.write(&snap).unwrap().unwrap();
        assert!(path.ends_with("2025-03.json"));

        let loaded = writer.read(person, &snap.month).unwrap().unwrap();
        assert_eq!(loaded, snap);
    }

    #[test]
    fn test_disabled_writer_skips() {
        let temp_dir = TempDir::new().unwrap();
        let writer = HistoryWriter::new(temp_dir.path().to_path_buf(), false);
        let person = PersonId::new();
        let snap = snapshot(person);

        assert!(writer.write(&snap).unwrap().is_none());
        assert!(writer.read(person, &snap.month).unwrap().is_none());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let temp_dir = TempDir::new().unwrap();
        let writer = HistoryWriter::new(temp_dir.path().to_path_buf(), true);
        let path = writer.write(&snapshot(PersonId::new())).unwrap().unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["month"], "2025-03");
        assert_eq!(value["expenses"][0]["category"], "Housing");
        assert_eq!(value["income"][0]["amount"], 100000);
    }
}
