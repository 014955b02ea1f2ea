//! Expense repository
//!
//! Handles persistence of expenses to expenses.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketbookError;
use crate::models::{CategoryId, Expense, ExpenseId, PersonId, YearMonth};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expenses
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), PocketbookError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for expense in file_data.expenses {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), PocketbookError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PocketbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    /// Get all expenses, ordered by month then creation time
    pub fn get_all(&self) -> Result<Vec<Expense>, PocketbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(list)
    }

    /// Expenses belonging to a person in a month, in entry order
    pub fn get_for_month(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> Result<Vec<Expense>, PocketbookError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.person_id == person_id && e.month == *month)
            .collect())
    }

    /// Number of expenses filed under a category, across all months
    pub fn count_for_category(&self, category_id: CategoryId) -> Result<usize, PocketbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses
            .values()
            .filter(|e| e.category_id == category_id)
            .count())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), PocketbookError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, PocketbookError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, PocketbookError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.len())
    }
}
