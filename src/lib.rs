//! Pocketbook - personal monthly budget from the terminal
//!
//! This library provides the core functionality for the Pocketbook
//! application: a single person's profile, monthly income entries,
//! categorized monthly expenses and a generated monthly report with totals,
//! a per-category breakdown and the month's balance.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (person, categories, income, expenses)
//! - `storage`: JSON file storage layer and month history snapshots
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`: Monthly report aggregation
//! - `display`: Terminal formatting
//! - `export`: Report export (text, CSV, JSON, YAML)
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::PocketbookPaths;
//! use pocketbook::models::YearMonth;
//! use pocketbook::services::ReportService;
//! use pocketbook::storage::Storage;
//!
//! let mut storage = Storage::new(PocketbookPaths::new()?)?;
//! storage.load_all()?;
//! let person = storage.people.get_primary()?.expect("profile");
//! let report = ReportService::new(&storage).monthly_report(person.id, YearMonth::new(2025, 1)?)?;
//! println!("balance: {}", report.balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
