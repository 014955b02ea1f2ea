//! Audit log for Pocketbook
//!
//! Every create, update and delete of a person, category, income entry or
//! expense is appended to `audit.log` as one JSON line.
//!
//! - `AuditEntry`: one record with timestamp, operation, entity and the
//!   before/after JSON values.
//! - `AuditLogger`: appends entries to the log and reads them back.
//! - `generate_diff`: summarizes top-level field changes for updates.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
