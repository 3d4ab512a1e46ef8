//! JSON Export functionality
//!
//! Exports the records of a session together with the derived totals and
//! projection, with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{BudgetTotals, MonthProjection, PROJECTION_MONTHS};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{IncomeRecord, Month, OneTimeExpense, RecurringExpense, SavingsAllocation};
use crate::session::BudgetSession;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// First month of the projection window
    pub start_month: Month,

    pub incomes: Vec<IncomeRecord>,
    pub recurring_expenses: Vec<RecurringExpense>,
    pub one_time_expenses: Vec<OneTimeExpense>,
    pub savings: Vec<SavingsAllocation>,

    /// Derived monthly and annual totals
    pub totals: BudgetTotals,

    /// Derived twelve-month projection
    pub projection: Vec<MonthProjection>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub recurring_expense_count: usize,
    pub one_time_expense_count: usize,
    pub savings_count: usize,
}

impl SnapshotExport {
    /// Capture the current state of a session
    pub fn from_session(session: &BudgetSession) -> PlannerResult<Self> {
        let incomes = session.incomes()?;
        let recurring_expenses = session.expenses()?;
        let one_time_expenses = session.one_time_expenses()?;
        let savings = session.savings()?;

        let metadata = ExportMetadata {
            income_count: incomes.len(),
            recurring_expense_count: recurring_expenses.len(),
            one_time_expense_count: one_time_expenses.len(),
            savings_count: savings.len(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            start_month: session.start_month(),
            incomes,
            recurring_expenses,
            one_time_expenses,
            savings,
            totals: *session.totals(),
            projection: session.projection().to_vec(),
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.projection.len() != PROJECTION_MONTHS {
            return Err(format!(
                "Projection has {} months, expected {}",
                self.projection.len(),
                PROJECTION_MONTHS
            ));
        }

        if self.projection.first().map(|m| m.month) != Some(self.start_month) {
            return Err("Projection does not start at the start month".to_string());
        }

        if self.metadata.income_count != self.incomes.len()
            || self.metadata.recurring_expense_count != self.recurring_expenses.len()
            || self.metadata.one_time_expense_count != self.one_time_expenses.len()
            || self.metadata.savings_count != self.savings.len()
        {
            return Err("Metadata counts do not match the records".to_string());
        }

        Ok(())
    }
}

/// Export a session snapshot to JSON
pub fn export_snapshot_json<W: Write>(
    session: &BudgetSession,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    let export = SnapshotExport::from_session(session)?;
    export.validate().map_err(PlannerError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| PlannerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
