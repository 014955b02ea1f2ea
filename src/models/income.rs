//! Income entry model
//!
//! One line of income (salary, freelance job, gift...) received by the person
//! in a given month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{IncomeId, PersonId};
use super::money::Money;
use super::year_month::YearMonth;

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount,
    AmountTooLarge(Money),
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Income name too long ({} chars, max 100)", len),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::AmountTooLarge(amount) => {
                write!(f, "Income amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Income received in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub person_id: PersonId,
    pub name: String,
    pub amount: Money,
    pub month: YearMonth,
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income entry
    pub fn new(
        person_id: PersonId,
        month: YearMonth,
        name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            person_id,
            name: name.into(),
            amount,
            month,
            created_at: Utc::now(),
        }
    }

    /// Validate the income entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(IncomeValidationError::NameTooLong(self.name.len()));
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.amount > Money::MAX {
            return Err(IncomeValidationError::AmountTooLarge(self.amount));
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
    fn test_new_income() {
        let person = PersonId::new();
        let income = Income::new(person, january(), "Salary", Money::from_cents(500000));

        assert_eq!(income.person_id, person);
        assert_eq!(income.month, january());
        assert_eq!(income.amount.cents(), 500000);
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_amount() {
        let income = Income::new(PersonId::new(), january(), "Refund", Money::from_cents(-100));
        assert_eq!(income.validate(), Err(IncomeValidationError::NegativeAmount));
    }

    #[test]
    fn test_validation_name() {
        let income = Income::new(PersonId::new(), january(), " ", Money::from_cents(100));
        assert_eq!(income.validate(), Err(IncomeValidationError::EmptyName));
    }

    #[test]
    fn test_validation_amount_cap() {
        let at_cap = Income::new(PersonId::new(), january(), "Lottery", Money::MAX);
        assert!(at_cap.validate().is_ok());

        let over = Money::MAX + Money::from_cents(1);
        let income = Income::new(PersonId::new(), january(), "Lottery", over);
        assert_eq!(income.validate(), Err(IncomeValidationError::AmountTooLarge(over)));
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let income = Income::new(PersonId::new(), january(), "Unpaid leave", Money::zero());
        assert!(income.validate().is_ok());
    }
}
