//! Expense service
//!
//! Records and removes a person's categorized monthly expenses.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{CategoryId, Expense, ExpenseId, Money, PersonId, YearMonth};
use crate::storage::Storage;

/// Service for expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense under an existing category
    pub fn add(
        &self,
        person_id: PersonId,
        month: YearMonth,
        category_id: CategoryId,
        name: &str,
        amount: Money,
        note: Option<String>,
    ) -> PocketbookResult<Expense> {
        if self.storage.people.get(person_id)?.is_none() {
            return Err(PocketbookError::person_not_found(person_id.to_string()));
        }

        let category = self.storage.categories.get(category_id)?.ok_or_else(|| {
            PocketbookError::Validation(format!(
                "Expense category {} does not exist",
                category_id
            ))
        })?;

        let expense =
            Expense::new(person_id, category.id, month, name.trim(), amount).with_note(note);
        expense
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;
        info!(
            expense = %expense.id,
            category = %category.name,
            month = %month,
            amount = %expense.amount,
            "expense added"
        );

        self.storage.refresh_history(person_id, &month);

        Ok(expense)
    }

    /// Expenses for a person's month, in entry order
    pub fn list_for_month(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> PocketbookResult<Vec<Expense>> {
        self.storage.expenses.get_for_month(person_id, month)
    }

    /// Expenses for a person's month, each paired with its category name
    pub fn list_for_month_with_categories(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> PocketbookResult<Vec<(Expense, String)>> {
        self.list_for_month(person_id, month)?
            .into_iter()
            .map(|expense| {
                let name = self
                    .storage
                    .categories
                    .get(expense.category_id)?
                    .map(|c| c.name)
                    .ok_or_else(|| {
                        PocketbookError::Integrity(format!(
                            "Expense {} references missing category {}",
                            expense.id, expense.category_id
                        ))
                    })?;
                Ok((expense, name))
            })
            .collect()
    }

    /// Find an expense by its ID in short or full form
    pub fn find(&self, identifier: &str) -> PocketbookResult<Option<Expense>> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .find(|e| e.id.matches(identifier)))
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> PocketbookResult<Expense> {
        let removed = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| PocketbookError::expense_not_found(id.to_string()))?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;
        info!(expense = %removed.id, month = %removed.month, "expense deleted");

        self.storage.refresh_history(removed.person_id, &removed.month);

        Ok(removed)
    }
}
