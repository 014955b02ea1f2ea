//! Income repository
//!
//! Handles persistence of income entries to income.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{Income, IncomeId, PersonId, YearMonth};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    income: Vec<Income>,
}

/// Repository for income entries
pub struct IncomeRepository {
    path: PathBuf,
    entries: RwLock<HashMap<IncomeId, Income>>,
}

impl IncomeRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Load income entries from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.clear();
        for income in file_data.income {
            entries.insert(income.id, income);
        }

        Ok(())
    }

    /// Save income entries to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let income = self.get_all()?;
        write_json_atomic(&self.path, &IncomeData { income })
    }

    /// Get an income entry by ID
    pub fn get(&self, id: IncomeId) -> Result<Option<Income>, PocketbookError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(&id).cloned())
    }

    /// Get all income entries, ordered by month then creation time
    pub fn get_all(&self) -> Result<Vec<Income>, PocketbookError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = entries.values().cloned().collect();
        list.sort_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(list)
    }

    /// Income belonging to a person in a month, in entry order
    pub fn get_for_month(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> Result<Vec<Income>, PocketbookError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|i| i.person_id == person_id && i.month == *month)
            .collect())
    }

    /// Insert or update an income entry
    pub fn upsert(&self, income: Income) -> Result<(), PocketbookError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(income.id, income);
        Ok(())
    }

    /// Delete an income entry, returning it if it existed
    pub fn delete(&self, id: IncomeId) -> Result<Option<Income>, PocketbookError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(entries.remove(&id))
    }

    /// Count income entries
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }
}
