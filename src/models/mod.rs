//! Core data models for Pocketbook
//!
//! This module contains the data structures of the monthly budgeting domain:
//! the person profile, expense categories, income entries and expenses.

pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod person;
pub mod year_month;

pub use category::{Category, DefaultCategory, DEFAULT_CATEGORY_COLOR};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, IncomeId, PersonId};
pub use income::Income;
pub use money::Money;
pub use person::Person;
pub use year_month::YearMonth;
