//! Storage layer for Pocketbook
//!
//! Provides JSON file storage with atomic writes, an append-only audit log
//! and per-month history snapshots.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod history;
pub mod income;
pub mod init;
pub mod people;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use history::{HistoryWriter, MonthSnapshot, SnapshotExpense, SnapshotIncome};
pub use income::IncomeRepository;
pub use init::initialize_storage;
pub use people::PersonRepository;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PocketbookPaths;
use crate::config::settings::Settings;
use crate::error::PocketbookError;
use crate::models::{PersonId, YearMonth};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketbookPaths,
    pub people: PersonRepository,
    pub categories: CategoryRepository,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    history: HistoryWriter,
}

impl Storage {
    /// Create a new Storage instance with history snapshots enabled
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        Self::with_settings(paths, &Settings::default())
    }

    /// Create a new Storage instance honoring the given settings
    pub fn with_settings(
        paths: PocketbookPaths,
        settings: &Settings,
    ) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            people: PersonRepository::new(paths.person_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            income: IncomeRepository::new(paths.income_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            history: HistoryWriter::new(paths.history_dir(), settings.history_enabled),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn history(&self) -> &HistoryWriter {
        &self.history
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PocketbookError> {
        self.people.load()?;
        self.categories.load()?;
        self.income.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketbookError> {
        self.people.save()?;
        self.categories.save()?;
        self.income.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketbookError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log with a summary of changed fields
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), PocketbookError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted entity in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketbookError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Build the snapshot of a person's month from the current records
    pub fn month_snapshot(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> Result<MonthSnapshot, PocketbookError> {
        let income = self
            .income
            .get_for_month(person_id, month)?
            .into_iter()
            .map(|i| SnapshotIncome {
                id: i.id,
                name: i.name,
                amount: i.amount,
            })
            .collect();

        let mut expenses = Vec::new();
        for expense in self.expenses.get_for_month(person_id, month)? {
            let category = self
                .categories
                .get(expense.category_id)?
                .map(|c| c.name)
                .ok_or_else(|| {
                    PocketbookError::Integrity(format!(
                        "Expense {} references missing category {}",
                        expense.id, expense.category_id
                    ))
                })?;
            expenses.push(SnapshotExpense {
                id: expense.id,
                name: expense.name,
                amount: expense.amount,
                category,
            });
        }

        Ok(MonthSnapshot {
            person_id,
            month: *month,
            income,
            expenses,
            generated_at: Utc::now(),
        })
    }

    /// Rewrite the history snapshot for a person's month
    ///
    /// Failures are logged and swallowed; the mutation that triggered the
    /// refresh has already been saved.
    pub fn refresh_history(&self, person_id: PersonId, month: &YearMonth) {
        if !self.history.is_enabled() {
            return;
        }

        let result = self
            .month_snapshot(person_id, month)
            .and_then(|snapshot| self.history.write(&snapshot));

        match result {
            Ok(Some(path)) => debug!(path = %path.display(), "history snapshot written"),
            Ok(None) => {}
            Err(e) => warn!(
                person = %person_id,
                month = %month,
                error = %e,
                "failed to write history snapshot"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Income, Money};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("history").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_audit_helpers() {
        let (_temp_dir, storage) = create_storage();
        let before = Category::new("Groceries");
        let mut after = before.clone();
        after.rename("Food");

        storage
            .log_create(EntityType::Category, before.id.to_string(), None, &before)
            .unwrap();
        storage
            .log_update(
                EntityType::Category,
                after.id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        let diff = entries[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("name: \"Groceries\" -> \"Food\""));
        assert!(!diff.contains("updated_at"));
    }

    #[test]
    fn test_refresh_history_writes_month() {
        let (_temp_dir, storage) = create_storage();
        let person = PersonId::new();
        let month = YearMonth::new(2025, 1).unwrap();
        let category = Category::new("Housing");

        storage.categories.upsert(category.clone()).unwrap();
        storage
            .income
            .upsert(Income::new(person, month, "Salary", Money::from_cents(100000)))
            .unwrap();
        storage
            .expenses
            .upsert(Expense::new(person, category.id, month, "Rent", Money::from_cents(40000)))
            .unwrap();

        storage.refresh_history(person, &month);

        let snapshot = storage.history().read(person, &month).unwrap().unwrap();
        assert_eq!(snapshot.income.len(), 1);
        assert_eq!(snapshot.expenses[0].category, "Housing");
    }

    #[test]
    fn test_refresh_history_swallows_integrity_failure() {
        let (_temp_dir, storage) = create_storage();
        let person = PersonId::new();
        let month = YearMonth::new(2025, 1).unwrap();

        storage
            .expenses
            .upsert(Expense::new(
                person,
                crate::models::CategoryId::new(),
                month,
                "Orphan",
                Money::from_cents(100),
            ))
            .unwrap();

        storage.refresh_history(person, &month);
        assert!(storage.history().read(person, &month).unwrap().is_none());
        assert!(storage.month_snapshot(person, &month).unwrap_err().is_integrity());
    }
}
