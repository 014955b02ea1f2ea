//! Display formatting for terminal output
//!
//! Tables for lists of categories, income and expenses, plus the person
//! profile view and the report helpers.

pub mod category;
pub mod ledger;
pub mod person;
pub mod report;

pub use category::{format_category_details, format_category_table};
pub use ledger::{format_expense_table, format_income_table};
pub use person::format_person_details;
