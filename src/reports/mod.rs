//! Reports module for Pocketbook
//!
//! The monthly report: income, expenses, balance and the per-category
//! breakdown of a person's month.

pub mod monthly;

pub use monthly::{aggregate, CategoryBreakdown, MonthlyReport};
