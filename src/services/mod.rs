//! Service layer for Pocketbook
//!
//! The service layer provides business logic on top of the storage layer:
//! validation before any write, persistence, audit entries, and history
//! snapshots for income and expense changes.

pub mod category;
pub mod expense;
pub mod income;
pub mod person;
pub mod report;

pub use category::CategoryService;
pub use expense::ExpenseService;
pub use income::IncomeService;
pub use person::PersonService;
pub use report::ReportService;
