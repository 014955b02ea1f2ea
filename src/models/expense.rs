//! Expense model
//!
//! A categorized spending line for a person in a given month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId, PersonId};
use super::money::Money;
use super::year_month::YearMonth;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount,
    AmountTooLarge(Money),
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Expense name too long ({} chars, max 100)", len),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Money spent in a month, filed under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub person_id: PersonId,
    pub category_id: CategoryId,
    pub name: String,
    pub amount: Money,
    pub month: YearMonth,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        person_id: PersonId,
        category_id: CategoryId,
        month: YearMonth,
        name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            person_id,
            category_id,
            name: name.into(),
            amount,
            month,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(ExpenseValidationError::NameTooLong(self.name.len()));
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let category = CategoryId::new();
        let expense = Expense::new(
            PersonId::new(),
            category,
            january(),
            "Weekly shop",
            Money::from_cents(8450),
        );

        assert_eq!(expense.category_id, category);
        assert!(expense.note.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_with_note() {
        let expense = Expense::new(
            PersonId::new(),
            CategoryId::new(),
            january(),
            "Dentist",
            Money::from_cents(6000),
        );

        let noted = expense.clone().with_note(Some("  check-up ".to_string()));
        assert_eq!(noted.note.as_deref(), Some("check-up"));

        let blank = expense.with_note(Some("   ".to_string()));
        assert!(blank.note.is_none());
    }

    #[test]
    fn test_validation_negative_amount() {
        let expense = Expense::new(
            PersonId::new(),
            CategoryId::new(),
            january(),
            "Oops",
            Money::from_cents(-1),
        );
        assert_eq!(expense.validate(), Err(ExpenseValidationError::NegativeAmount));
    }

    #[test]
    fn test_validation_amount_cap() {
        let over = Money::MAX + Money::from_cents(1);
        let expense = Expense::new(PersonId::new(), CategoryId::new(), january(), "Yacht", over);
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::AmountTooLarge(over))
        );
    }

    #[test]
    fn test_note_omitted_from_json_when_absent() {
        let expense = Expense::new(
            PersonId::new(),
            CategoryId::new(),
            january(),
            "Bus pass",
            Money::from_cents(3000),
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["month"], "2025-01");
    }
}
