//! Income service
//!
//! Records and removes a person's monthly income entries.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Income, IncomeId, Money, PersonId, YearMonth};
use crate::storage::Storage;

/// Service for income entries
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record income for a person's month
    pub fn add(
        &self,
        person_id: PersonId,
        month: YearMonth,
        name: &str,
        amount: Money,
    ) -> PocketbookResult<Income> {
        if self.storage.people.get(person_id)?.is_none() {
            return Err(PocketbookError::person_not_found(person_id.to_string()));
        }

        let income = Income::new(person_id, month, name.trim(), amount);
        income
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        self.storage.income.upsert(income.clone())?;
        self.storage.income.save()?;

        self.storage.log_create(
            EntityType::Income,
            income.id.to_string(),
            Some(income.name.clone()),
            &income,
        )?;
        info!(income = %income.id, month = %month, amount = %income.amount, "income added");

        self.storage.refresh_history(person_id, &month);

        Ok(income)
    }

    /// Income entries for a person's month, in entry order
    pub fn list_for_month(
        &self,
        person_id: PersonId,
        month: &YearMonth,
    ) -> PocketbookResult<Vec<Income>> {
        self.storage.income.get_for_month(person_id, month)
    }

    /// Find an income entry by its ID in short or full form
    pub fn find(&self, identifier: &str) -> PocketbookResult<Option<Income>> {
        Ok(self
            .storage
            .income
            .get_all()?
            .into_iter()
            .find(|i| i.id.matches(identifier)))
    }

    /// Delete an income entry
    pub fn delete(&self, id: IncomeId) -> PocketbookResult<Income> {
        let removed = self
            .storage
            .income
            .delete(id)?
            .ok_or_else(|| PocketbookError::income_not_found(id.to_string()))?;
        self.storage.income.save()?;

        self.storage.log_delete(
            EntityType::Income,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;
        info!(income = %removed.id, month = %removed.month, "income deleted");

        self.storage.refresh_history(removed.person_id, &removed.month);

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{create_person, create_test_storage};

    fn january() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let person = create_person(&storage);
        let service = IncomeService::new(&storage);

        service
            .add(person.id, january(), "Salary", Money::from_cents(250000))
            .unwrap();
        service
            .add(person.id, january().next(), "Salary", Money::from_cents(260000))
            .unwrap();

        let listed = service.list_for_month(person.id, &january()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount.cents(), 250000);
    }

    #[test]
    fn test_add_validation_leaves_store_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let person = create_person(&storage);
        let service = IncomeService::new(&storage);

        let err = service
            .add(person.id, january(), "Refund", Money::from_cents(-100))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add(person.id, january(), "  ", Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.income.count().unwrap(), 0);
    }

    #[test]
    fn test_add_for_unknown_person() {
        let (_temp_dir, storage) = create_test_storage();
        let err = IncomeService::new(&storage)
            .add(PersonId::new(), january(), "Salary", Money::from_cents(1))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_writes_history_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let person = create_person(&storage);

        IncomeService::new(&storage)
            .add(person.id, january(), "Salary", Money::from_cents(250000))
            .unwrap();

        let snapshot = storage.history().read(person.id, &january()).unwrap().unwrap();
        assert_eq!(snapshot.income.len(), 1);
        assert_eq!(snapshot.income[0].name, "Salary");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let person = create_person(&storage);
        let service = IncomeService::new(&storage);

        let income = service
            .add(person.id, january(), "Gift", Money::from_cents(5000))
            .unwrap();
        let found = service.find(&income.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, income.id);

        service.delete(income.id).unwrap();
        assert!(service.list_for_month(person.id, &january()).unwrap().is_empty());
        assert!(service.delete(income.id).unwrap_err().is_not_found());

        let snapshot = storage.history().read(person.id, &january()).unwrap().unwrap();
        assert!(snapshot.income.is_empty());
    }
}
