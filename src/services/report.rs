//! Report service
//!
//! Loads a person's month from the store and aggregates it.

use chrono::Local;
use tracing::debug;

use crate::error::PocketbookResult;
use crate::export::ReportDocument;
use crate::models::{PersonId, YearMonth};
use crate::reports::MonthlyReport;
use crate::storage::Storage;

use super::{ExpenseService, IncomeService, PersonService};

/// Service for monthly reports
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Aggregate a person's month
    ///
    /// An unknown person is `NotFound`; a month without records yields an
    /// all-zero report.
    pub fn monthly_report(
        &self,
        person_id: PersonId,
        month: YearMonth,
    ) -> PocketbookResult<MonthlyReport> {
        let report = MonthlyReport::generate(self.storage, person_id, month)?;
        debug!(
            person = %person_id,
            month = %month,
            income = report.income_count,
            expenses = report.expense_count,
            "monthly report generated"
        );
        Ok(report)
    }

    /// Everything an exported report needs: profile, report and the lists
    pub fn document(
        &self,
        person_id: PersonId,
        month: YearMonth,
    ) -> PocketbookResult<ReportDocument> {
        let person = PersonService::new(self.storage).get_by_id(person_id)?;
        let report = self.monthly_report(person_id, month)?;
        let income = IncomeService::new(self.storage).list_for_month(person_id, &month)?;
        let expenses =
            ExpenseService::new(self.storage).list_for_month_with_categories(person_id, &month)?;

        Ok(ReportDocument::new(
            &person,
            report,
            &income,
            &expenses,
            Local::now().date_naive(),
        ))
    }
}
